use super::*;

/// Tests the list envelope and page size.
///
/// Verifies that a page never holds more than `pageSize` rows and that `total` counts all
/// matching rows.
///
/// Expected: 200 with 2 rows, total 5
#[tokio::test]
async fn honors_page_size() -> Result<(), AppError> {
    let app = TestApp::new().await;
    for _ in 0..5 {
        factory::create_type(&app.db).await?;
    }

    let (status, body) = app.get("/api/pokemon-type?page=2&pageSize=2", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["total"], 5);
    assert_eq!(body["page"], 2);
    assert_eq!(body["pageSize"], 2);

    Ok(())
}

/// Tests rejecting page and page size below 1.
///
/// Expected: 400 for page=0 and pageSize=0
#[tokio::test]
async fn rejects_zero_page_or_page_size() {
    let app = TestApp::new().await;

    for uri in ["/api/move?page=0", "/api/move?pageSize=0"] {
        let (status, body) = app.get(uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_error_body(&body, StatusCode::BAD_REQUEST);
    }
}

/// Tests rejecting page values the database cannot bind.
///
/// Expected: 400 for a page size beyond i64 and for an overflowing offset
#[tokio::test]
async fn rejects_out_of_range_pagination() {
    let app = TestApp::new().await;

    for uri in [
        "/api/pokemon-type?pageSize=18446744073709551615",
        "/api/pokemon-type?page=4294967296&pageSize=4294967296",
    ] {
        let (status, body) = app.get(uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_error_body(&body, StatusCode::BAD_REQUEST);
    }
}

/// Tests filtering and sorting through the query string.
///
/// Expected: only moves of the requested type, highest id first
#[tokio::test]
async fn filters_and_sorts() -> Result<(), AppError> {
    let app = TestApp::new().await;
    let electric = factory::create_type(&app.db).await?;
    let normal = factory::create_type(&app.db).await?;
    let thundershock = factory::create_move(&app.db, electric.id).await?;
    let thunderbolt = factory::create_move(&app.db, electric.id).await?;
    factory::create_move(&app.db, normal.id).await?;

    let (status, body) = app
        .get(
            &format!("/api/move?typeId={}&sortBy=id&sortOrder=desc", electric.id),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec![i64::from(thunderbolt.id), i64::from(thundershock.id)]
    );

    Ok(())
}

/// Tests relation keys on list items.
///
/// Expected: every declared relation with `full=true`, none without
#[tokio::test]
async fn projects_list_items() -> Result<(), AppError> {
    let app = TestApp::new().await;
    let kind = factory::create_type(&app.db).await?;
    factory::create_move(&app.db, kind.id).await?;

    let (_, basic) = app.get("/api/move", None).await;
    let (_, full) = app.get("/api/move?full=true", None).await;

    assert_relation_keys::<MoveResource>(&basic["data"][0], false);
    assert_relation_keys::<MoveResource>(&full["data"][0], true);
    assert_eq!(full["data"][0]["type"]["id"], kind.id);

    Ok(())
}

/// Tests that user listing requires a session.
///
/// Expected: 401 anonymous, 200 logged in
#[tokio::test]
async fn user_list_requires_session() -> Result<(), AppError> {
    let app = TestApp::new().await;
    let user = factory::create_user(&app.db).await?;
    let cookie = app.login(user.id).await;

    let (status, _) = app.get("/api/user", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app.get("/api/user", Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);

    Ok(())
}
