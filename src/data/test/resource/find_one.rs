use super::*;

/// Tests finding a row by id.
///
/// Verifies that an active row is returned without relations when none are requested.
///
/// Expected: Ok(Record) with empty relations
#[tokio::test]
async fn finds_active_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let league = factory::create_league(db).await?;

    let record = ResourceRepository::<LeagueResource>::new(db)
        .find_one(league.id, &Filter::new(), &[])
        .await?;

    assert_eq!(record.model, league);
    assert!(record.relations.is_empty());

    Ok(())
}

/// Tests that a soft-deleted row is not found.
///
/// Verifies that reading a row after deleting it yields NotFound.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_after_delete() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let league = factory::create_league(db).await?;
    let repo = ResourceRepository::<LeagueResource>::new(db);
    repo.delete(league.id).await?;

    let result = repo.find_one(league.id, &Filter::new(), &[]).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that the filter restricts which row may be found.
///
/// Verifies that a team is not found through the filter of another league, which is how
/// league-nested routes keep rows of other leagues out of reach.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn applies_filter_to_lookup() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, season) = factory::helpers::create_league_with_season(db).await?;
    let other_league = factory::create_league(db).await?;
    let coach = factory::create_user(db).await?;
    let team = factory::create_team(db, &season, coach.id).await?;

    let result = ResourceRepository::<TeamResource>::new(db)
        .find_one(
            team.id,
            &Filter::new().eq(entity::team::Column::LeagueId, other_league.id),
            &[],
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests loading relations with a row.
///
/// Verifies that each requested relation is present under its name.
///
/// Expected: Ok with `seasons`, `teams` and `members` keys
#[tokio::test]
async fn loads_requested_relations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (league, season) = factory::helpers::create_league_with_season(db).await?;

    let record = ResourceRepository::<LeagueResource>::new(db)
        .find_one(league.id, &Filter::new(), &["seasons", "teams", "members"])
        .await?;

    assert_eq!(record.relations.len(), 3);
    assert_eq!(record.relations["seasons"][0]["id"], season.id);
    assert_eq!(record.relations["teams"], serde_json::json!([]));

    Ok(())
}
