use super::*;

/// Tests partial updates.
///
/// Verifies that only the columns set in the changes are written and `updated_at` moves
/// forward.
///
/// Expected: Ok with the new name and the previous description
#[tokio::test]
async fn updates_only_set_columns() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let league = factory::league::LeagueFactory::new(db)
        .name("Kanto Cup")
        .description("Gen 1 draft")
        .build()
        .await?;

    let updated = ResourceRepository::<LeagueResource>::new(db)
        .update(
            league.id,
            entity::league::ActiveModel {
                name: ActiveValue::Set("Johto Cup".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, "Johto Cup");
    assert_eq!(updated.description.as_deref(), Some("Gen 1 draft"));
    assert_eq!(updated.created_at, league.created_at);
    assert!(updated.updated_at >= league.updated_at);

    Ok(())
}

/// Tests updating a soft-deleted row.
///
/// Verifies that inactive rows cannot be updated.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_inactive_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let league = factory::create_league(db).await?;
    let repo = ResourceRepository::<LeagueResource>::new(db);
    repo.delete(league.id).await?;

    let result = repo
        .update(
            league.id,
            entity::league::ActiveModel {
                name: ActiveValue::Set("Revived".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests merging changes onto a stored row.
///
/// Verifies that a nullable column explicitly set to `None` is cleared while untouched
/// columns keep their stored value.
///
/// Expected: description cleared, name unchanged
#[tokio::test]
async fn merge_clears_nullable_column() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let league = factory::league::LeagueFactory::new(db)
        .description("to be removed")
        .build()
        .await?;

    let merged = merge_changes::<LeagueResource>(
        league.clone(),
        &entity::league::ActiveModel {
            description: ActiveValue::Set(None),
            ..Default::default()
        },
    );

    assert_eq!(merged.description, ActiveValue::Set(None));
    assert_eq!(merged.name, ActiveValue::Unchanged(league.name));

    Ok(())
}
