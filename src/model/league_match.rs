use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub id: i32,
    pub league_id: i32,
    pub season_id: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub played_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateMatchDto {
    #[serde(default)]
    pub league_id: Option<i32>,
    pub season_id: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    #[serde(default)]
    pub home_score: Option<i32>,
    #[serde(default)]
    pub away_score: Option<i32>,
    #[serde(default)]
    pub played_at: Option<DateTime<Utc>>,
}

/// Records or corrects a result.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMatchDto {
    #[serde(default, deserialize_with = "crate::util::nullable::deserialize")]
    pub home_score: Option<Option<i32>>,
    #[serde(default, deserialize_with = "crate::util::nullable::deserialize")]
    pub away_score: Option<Option<i32>>,
    #[serde(default, deserialize_with = "crate::util::nullable::deserialize")]
    pub played_at: Option<Option<DateTime<Utc>>>,
}
