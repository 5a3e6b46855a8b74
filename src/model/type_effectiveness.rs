use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TypeEffectivenessDto {
    pub id: i32,
    pub attacking_type_id: i32,
    pub defending_type_id: i32,
    pub multiplier: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTypeEffectivenessDto {
    pub attacking_type_id: i32,
    pub defending_type_id: i32,
    pub multiplier: f64,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTypeEffectivenessDto {
    pub multiplier: Option<f64>,
}
