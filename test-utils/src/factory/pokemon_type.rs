use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct PokemonTypeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    color: Option<String>,
}

impl<'a> PokemonTypeFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Type {}", next_id()),
            color: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub async fn build(self) -> Result<entity::pokemon_type::Model, DbErr> {
        let now = Utc::now();
        entity::pokemon_type::ActiveModel {
            name: ActiveValue::Set(self.name),
            color: ActiveValue::Set(self.color),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_type(db: &DatabaseConnection) -> Result<entity::pokemon_type::Model, DbErr> {
    PokemonTypeFactory::new(db).build().await
}
