use super::*;

/// Tests that created rows are active and timestamped.
///
/// Verifies that the repository sets `is_active`, `created_at` and `updated_at` regardless
/// of what the active model carried.
///
/// Expected: Ok with an active row whose timestamps are equal
#[tokio::test]
async fn stamps_new_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pokemon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = ResourceRepository::<PokemonTypeResource>::new(db)
        .create(entity::pokemon_type::ActiveModel {
            name: ActiveValue::Set("Fire".to_string()),
            color: ActiveValue::Set(Some("#F08030".to_string())),
            ..Default::default()
        })
        .await?;

    assert!(created.is_active);
    assert_eq!(created.created_at, created.updated_at);
    assert_eq!(created.name, "Fire");

    let stored = entity::prelude::PokemonType::find_by_id(created.id)
        .one(db)
        .await?;
    assert_eq!(stored, Some(created));

    Ok(())
}
