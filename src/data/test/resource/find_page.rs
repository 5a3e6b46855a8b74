use super::*;

/// Tests paginating active rows.
///
/// Verifies that a page holds at most `page_size` rows and that `total` counts every
/// matching active row.
///
/// Expected: Ok with 2 rows on page 1 and total 5
#[tokio::test]
async fn returns_requested_page_and_total() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pokemon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_type(db).await?;
    }

    let page = ResourceRepository::<PokemonTypeResource>::new(db)
        .find_page(
            &Filter::new(),
            &Sort::default(),
            &[],
            Pagination {
                page: 1,
                page_size: 2,
            },
        )
        .await?;

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.total, 5);
    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, 2);

    Ok(())
}

/// Tests that the last page may be partial and pages past the end are empty.
///
/// Verifies page arithmetic for 3 rows with a page size of 2.
///
/// Expected: Ok with 1 row on page 2 and 0 rows on page 3
#[tokio::test]
async fn returns_partial_and_empty_pages() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pokemon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_type(db).await?;
    }

    let repo = ResourceRepository::<PokemonTypeResource>::new(db);
    let second = repo
        .find_page(
            &Filter::new(),
            &Sort::default(),
            &[],
            Pagination {
                page: 2,
                page_size: 2,
            },
        )
        .await?;
    let third = repo
        .find_page(
            &Filter::new(),
            &Sort::default(),
            &[],
            Pagination {
                page: 3,
                page_size: 2,
            },
        )
        .await?;

    assert_eq!(second.data.len(), 1);
    assert!(third.data.is_empty());
    assert_eq!(third.total, 3);

    Ok(())
}

/// Tests that soft-deleted rows are excluded from lists.
///
/// Verifies that `total` and `data` only reflect active rows.
///
/// Expected: Ok with total 1
#[tokio::test]
async fn excludes_inactive_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pokemon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let kept = factory::create_type(db).await?;
    let removed = factory::create_type(db).await?;

    let repo = ResourceRepository::<PokemonTypeResource>::new(db);
    repo.delete(removed.id).await?;

    let page = repo
        .find_page(
            &Filter::new(),
            &Sort::default(),
            &[],
            Pagination::default(),
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].model.id, kept.id);

    Ok(())
}

/// Tests equality filters and descending sort.
///
/// Verifies that only moves of the filtered type are returned, newest id first.
///
/// Expected: Ok with the two fire moves in descending id order
#[tokio::test]
async fn applies_filter_and_sort() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pokemon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let fire = factory::create_type(db).await?;
    let water = factory::create_type(db).await?;
    let ember = factory::create_move(db, fire.id).await?;
    let flamethrower = factory::create_move(db, fire.id).await?;
    factory::create_move(db, water.id).await?;

    let page = ResourceRepository::<MoveResource>::new(db)
        .find_page(
            &Filter::new().eq(entity::pokemon_move::Column::TypeId, fire.id),
            &Sort::new(entity::pokemon_move::Column::Id, Order::Desc),
            &[],
            Pagination::default(),
        )
        .await?;

    let ids: Vec<i32> = page.data.iter().map(|record| record.model.id).collect();
    assert_eq!(ids, vec![flamethrower.id, ember.id]);
    assert_eq!(page.total, 2);

    Ok(())
}
