use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeagueUserDto {
    pub id: i32,
    pub league_id: i32,
    pub user_id: i32,
    pub is_moderator: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Adds a user to a league. `leagueId` may be omitted on league-nested routes.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateLeagueUserDto {
    #[serde(default)]
    pub league_id: Option<i32>,
    pub user_id: i32,
    #[serde(default)]
    pub is_moderator: bool,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeagueUserDto {
    pub is_moderator: Option<bool>,
}
