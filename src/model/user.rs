use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub discord_id: String,
    pub name: String,
    pub admin: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateUserDto {
    pub discord_id: String,
    pub name: String,
    #[serde(default)]
    pub admin: bool,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub name: Option<String>,
    pub admin: Option<bool>,
}

/// League membership of the logged in user.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MembershipDto {
    pub league_id: i32,
    pub is_moderator: bool,
}

/// Response of `GET /api/auth/user`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserDto {
    #[serde(flatten)]
    pub user: UserDto,
    pub memberships: Vec<MembershipDto>,
}
