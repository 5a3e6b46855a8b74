use super::*;

/// Tests natural key lookups.
///
/// Verifies that `exists` sees an active row with the same name but not the row being
/// updated itself.
///
/// Expected: true without exclusion, false when excluding the row
#[tokio::test]
async fn honors_excluded_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let league = factory::league::LeagueFactory::new(db)
        .name("Sinnoh League")
        .build()
        .await?;

    let repo = ResourceRepository::<LeagueResource>::new(db);
    let filter = Filter::new().eq(entity::league::Column::Name, "Sinnoh League");

    assert!(repo.exists(&filter, None).await?);
    assert!(!repo.exists(&filter, Some(league.id)).await?);

    Ok(())
}

/// Tests that soft-deleted rows free their natural key.
///
/// Verifies that a deleted league no longer counts as holding its name.
///
/// Expected: false after delete
#[tokio::test]
async fn ignores_inactive_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let league = factory::league::LeagueFactory::new(db)
        .name("Hoenn League")
        .build()
        .await?;

    let repo = ResourceRepository::<LeagueResource>::new(db);
    repo.delete(league.id).await?;

    let filter = Filter::new().eq(entity::league::Column::Name, "Hoenn League");
    assert!(!repo.exists(&filter, None).await?);

    Ok(())
}
