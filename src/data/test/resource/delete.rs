use super::*;

/// Tests soft deletion.
///
/// Verifies that deleting keeps the row in the table with `is_active = false`.
///
/// Expected: Ok(true) and the stored row is inactive
#[tokio::test]
async fn deactivates_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let deleted = ResourceRepository::<UserResource>::new(db)
        .delete(user.id)
        .await?;

    assert!(deleted);

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(stored.is_some_and(|user| !user.is_active));

    Ok(())
}

/// Tests deleting twice.
///
/// Verifies that a second delete reports that no active row was affected.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = ResourceRepository::<UserResource>::new(db);

    assert!(repo.delete(user.id).await?);
    assert!(!repo.delete(user.id).await?);
    assert!(!repo.delete(user.id + 100).await?);

    Ok(())
}
