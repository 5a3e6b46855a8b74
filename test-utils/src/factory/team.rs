use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for teams. The league is taken from the season.
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    league_id: i32,
    season_id: i32,
    coach_id: i32,
    name: String,
}

impl<'a> TeamFactory<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        season: &entity::season::Model,
        coach_id: i32,
    ) -> Self {
        Self {
            db,
            league_id: season.league_id,
            season_id: season.id,
            coach_id,
            name: format!("Team {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        let now = Utc::now();
        entity::team::ActiveModel {
            league_id: ActiveValue::Set(self.league_id),
            season_id: ActiveValue::Set(self.season_id),
            coach_id: ActiveValue::Set(self.coach_id),
            name: ActiveValue::Set(self.name),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_team(
    db: &DatabaseConnection,
    season: &entity::season::Model,
    coach_id: i32,
) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db, season, coach_id).build().await
}
