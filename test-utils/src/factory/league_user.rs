use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

async fn insert_membership(
    db: &DatabaseConnection,
    league_id: i32,
    user_id: i32,
    is_moderator: bool,
) -> Result<entity::league_user::Model, DbErr> {
    let now = Utc::now();
    entity::league_user::ActiveModel {
        league_id: ActiveValue::Set(league_id),
        user_id: ActiveValue::Set(user_id),
        is_moderator: ActiveValue::Set(is_moderator),
        is_active: ActiveValue::Set(true),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Adds `user_id` to the league as a regular member.
pub async fn create_member(
    db: &DatabaseConnection,
    league_id: i32,
    user_id: i32,
) -> Result<entity::league_user::Model, DbErr> {
    insert_membership(db, league_id, user_id, false).await
}

/// Adds `user_id` to the league as a moderator.
pub async fn create_moderator(
    db: &DatabaseConnection,
    league_id: i32,
    user_id: i32,
) -> Result<entity::league_user::Model, DbErr> {
    insert_membership(db, league_id, user_id, true).await
}
