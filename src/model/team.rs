use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub id: i32,
    pub league_id: i32,
    pub season_id: i32,
    pub coach_id: i32,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTeamDto {
    #[serde(default)]
    pub league_id: Option<i32>,
    pub season_id: i32,
    pub coach_id: i32,
    pub name: String,
}

/// Teams keep their league, season and coach for life; only the name changes.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamDto {
    pub name: Option<String>,
}
