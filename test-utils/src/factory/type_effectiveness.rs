use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub async fn create_type_effectiveness(
    db: &DatabaseConnection,
    attacking_type_id: i32,
    defending_type_id: i32,
    multiplier: f64,
) -> Result<entity::type_effectiveness::Model, DbErr> {
    let now = Utc::now();
    entity::type_effectiveness::ActiveModel {
        attacking_type_id: ActiveValue::Set(attacking_type_id),
        defending_type_id: ActiveValue::Set(defending_type_id),
        multiplier: ActiveValue::Set(multiplier),
        is_active: ActiveValue::Set(true),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
