use super::*;
use crate::data::resource::{has_active, related_many, related_one};
use sea_orm::ColumnTrait;

/// Tests loading a to-many relation.
///
/// Verifies that only active related rows are returned, as basic DTOs ordered by id.
///
/// Expected: JSON array with the one remaining move
#[tokio::test]
async fn related_many_skips_inactive_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pokemon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let kind = factory::create_type(db).await?;
    let kept = factory::create_move(db, kind.id).await?;
    let removed = factory::create_move(db, kind.id).await?;
    ResourceRepository::<MoveResource>::new(db)
        .delete(removed.id)
        .await?;

    let value = related_many::<MoveResource>(
        db,
        entity::pokemon_move::Column::TypeId.eq(kind.id),
    )
    .await?;

    let moves = value.as_array().unwrap();
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0]["id"], kept.id);
    assert_eq!(moves[0]["typeId"], kind.id);

    Ok(())
}

/// Tests loading a to-one relation.
///
/// Verifies that an absent or inactive target becomes `null`.
///
/// Expected: object for an active type, null otherwise
#[tokio::test]
async fn related_one_returns_null_for_missing_target() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pokemon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let kind = factory::create_type(db).await?;
    let removed = factory::create_type(db).await?;
    ResourceRepository::<PokemonTypeResource>::new(db)
        .delete(removed.id)
        .await?;

    let found = related_one::<PokemonTypeResource>(db, Some(kind.id)).await?;
    let inactive = related_one::<PokemonTypeResource>(db, Some(removed.id)).await?;
    let absent = related_one::<PokemonTypeResource>(db, None).await?;

    assert_eq!(found["name"], kind.name);
    assert!(inactive.is_null());
    assert!(absent.is_null());

    Ok(())
}

/// Tests the dependent check used by delete guards.
///
/// Expected: true while an active move exists, false after it is deleted
#[tokio::test]
async fn has_active_tracks_deletes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pokemon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let kind = factory::create_type(db).await?;
    let tackle = factory::create_move(db, kind.id).await?;

    let condition = || entity::pokemon_move::Column::TypeId.eq(kind.id);
    assert!(has_active::<MoveResource>(db, condition()).await?);

    ResourceRepository::<MoveResource>::new(db)
        .delete(tackle.id)
        .await?;

    assert!(!has_active::<MoveResource>(db, condition()).await?);

    Ok(())
}
