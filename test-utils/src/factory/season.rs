use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct SeasonFactory<'a> {
    db: &'a DatabaseConnection,
    league_id: i32,
    name: String,
}

impl<'a> SeasonFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, league_id: i32) -> Self {
        Self {
            db,
            league_id,
            name: format!("Season {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::season::Model, DbErr> {
        let now = Utc::now();
        entity::season::ActiveModel {
            league_id: ActiveValue::Set(self.league_id),
            name: ActiveValue::Set(self.name),
            starts_at: ActiveValue::Set(None),
            ends_at: ActiveValue::Set(None),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_season(
    db: &DatabaseConnection,
    league_id: i32,
) -> Result<entity::season::Model, DbErr> {
    SeasonFactory::new(db, league_id).build().await
}
