use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoveDto {
    pub id: i32,
    pub name: String,
    pub type_id: i32,
    pub category: String,
    pub power: Option<i32>,
    pub accuracy: Option<i32>,
    pub pp: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateMoveDto {
    pub name: String,
    pub type_id: i32,
    pub category: String,
    #[serde(default)]
    pub power: Option<i32>,
    #[serde(default)]
    pub accuracy: Option<i32>,
    pub pp: i32,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMoveDto {
    pub name: Option<String>,
    pub type_id: Option<i32>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "crate::util::nullable::deserialize")]
    pub power: Option<Option<i32>>,
    #[serde(default, deserialize_with = "crate::util::nullable::deserialize")]
    pub accuracy: Option<Option<i32>>,
    pub pp: Option<i32>,
}
