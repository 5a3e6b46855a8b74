use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a 40 power physical move of the given type.
pub async fn create_move(
    db: &DatabaseConnection,
    type_id: i32,
) -> Result<entity::pokemon_move::Model, DbErr> {
    let now = Utc::now();
    entity::pokemon_move::ActiveModel {
        name: ActiveValue::Set(format!("Move {}", next_id())),
        type_id: ActiveValue::Set(type_id),
        category: ActiveValue::Set("physical".to_string()),
        power: ActiveValue::Set(Some(40)),
        accuracy: ActiveValue::Set(Some(100)),
        pp: ActiveValue::Set(35),
        is_active: ActiveValue::Set(true),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
