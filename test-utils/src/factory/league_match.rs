use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an unplayed match between two teams of the same season.
pub async fn create_match(
    db: &DatabaseConnection,
    home: &entity::team::Model,
    away: &entity::team::Model,
) -> Result<entity::league_match::Model, DbErr> {
    let now = Utc::now();
    entity::league_match::ActiveModel {
        league_id: ActiveValue::Set(home.league_id),
        season_id: ActiveValue::Set(home.season_id),
        home_team_id: ActiveValue::Set(home.id),
        away_team_id: ActiveValue::Set(away.id),
        home_score: ActiveValue::Set(None),
        away_score: ActiveValue::Set(None),
        played_at: ActiveValue::Set(None),
        is_active: ActiveValue::Set(true),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
