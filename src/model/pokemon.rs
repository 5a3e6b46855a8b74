use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PokemonDto {
    pub id: i32,
    pub dex_id: i32,
    pub name: String,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub special_attack: i32,
    pub special_defense: i32,
    pub speed: i32,
    pub primary_type_id: i32,
    pub secondary_type_id: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreatePokemonDto {
    pub dex_id: i32,
    pub name: String,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub special_attack: i32,
    pub special_defense: i32,
    pub speed: i32,
    pub primary_type_id: i32,
    #[serde(default)]
    pub secondary_type_id: Option<i32>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePokemonDto {
    pub dex_id: Option<i32>,
    pub name: Option<String>,
    pub hp: Option<i32>,
    pub attack: Option<i32>,
    pub defense: Option<i32>,
    pub special_attack: Option<i32>,
    pub special_defense: Option<i32>,
    pub speed: Option<i32>,
    pub primary_type_id: Option<i32>,
    #[serde(default, deserialize_with = "crate::util::nullable::deserialize")]
    pub secondary_type_id: Option<Option<i32>>,
}
