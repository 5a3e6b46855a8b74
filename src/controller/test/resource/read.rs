use super::*;

/// Tests basic and full projections of a single row.
///
/// Verifies that every declared relation key is present with `full=true` and absent
/// otherwise, for a resource with to-one and to-many relations.
///
/// Expected: 200 with matching relation keys
#[tokio::test]
async fn projects_declared_relations() -> Result<(), AppError> {
    let app = TestApp::new().await;
    let (league, season, home, _, _) =
        factory::helpers::create_match_with_dependencies(&app.db).await?;

    let uri = format!("/api/team/{}", home.id);
    let (status, basic) = app.get(&uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_relation_keys::<TeamResource>(&basic, false);

    let (status, full) = app.get(&format!("{}?full=true", uri), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_relation_keys::<TeamResource>(&full, true);
    assert_eq!(full["league"]["id"], league.id);
    assert_eq!(full["season"]["id"], season.id);
    assert_eq!(full["homeMatches"].as_array().unwrap().len(), 1);
    assert_eq!(full["awayMatches"], json!([]));

    Ok(())
}

/// Tests full projection of every reference data resource.
///
/// Expected: all declared relation keys present for types, moves and pokemon
#[tokio::test]
async fn projects_reference_data() -> Result<(), AppError> {
    let app = TestApp::new().await;
    let kind = factory::create_type(&app.db).await?;
    let tackle = factory::create_move(&app.db, kind.id).await?;
    let pokemon = factory::create_pokemon(&app.db, kind.id).await?;

    let (_, body) = app
        .get(&format!("/api/pokemon-type/{}?full=true", kind.id), None)
        .await;
    assert_relation_keys::<PokemonTypeResource>(&body, true);

    let (_, body) = app
        .get(&format!("/api/move/{}?full=true", tackle.id), None)
        .await;
    assert_relation_keys::<MoveResource>(&body, true);

    let (_, body) = app
        .get(&format!("/api/pokemon/{}?full=true", pokemon.id), None)
        .await;
    assert_relation_keys::<PokemonResource>(&body, true);
    assert!(body["secondaryType"].is_null());

    Ok(())
}

/// Tests reading a missing row.
///
/// Expected: 404 with the uniform body
#[tokio::test]
async fn missing_row_returns_404() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/pokemon/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body(&body, StatusCode::NOT_FOUND);
}
