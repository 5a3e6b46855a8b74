use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for pokemon. Every base stat defaults to 50 and the dex number to a fresh value.
pub struct PokemonFactory<'a> {
    db: &'a DatabaseConnection,
    dex_id: i32,
    name: String,
    primary_type_id: i32,
    secondary_type_id: Option<i32>,
}

impl<'a> PokemonFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, primary_type_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            dex_id: id as i32,
            name: format!("Pokemon {}", id),
            primary_type_id,
            secondary_type_id: None,
        }
    }

    pub fn dex_id(mut self, dex_id: i32) -> Self {
        self.dex_id = dex_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn secondary_type_id(mut self, type_id: i32) -> Self {
        self.secondary_type_id = Some(type_id);
        self
    }

    pub async fn build(self) -> Result<entity::pokemon::Model, DbErr> {
        let now = Utc::now();
        entity::pokemon::ActiveModel {
            dex_id: ActiveValue::Set(self.dex_id),
            name: ActiveValue::Set(self.name),
            hp: ActiveValue::Set(50),
            attack: ActiveValue::Set(50),
            defense: ActiveValue::Set(50),
            special_attack: ActiveValue::Set(50),
            special_defense: ActiveValue::Set(50),
            speed: ActiveValue::Set(50),
            primary_type_id: ActiveValue::Set(self.primary_type_id),
            secondary_type_id: ActiveValue::Set(self.secondary_type_id),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_pokemon(
    db: &DatabaseConnection,
    primary_type_id: i32,
) -> Result<entity::pokemon::Model, DbErr> {
    PokemonFactory::new(db, primary_type_id).build().await
}
