use super::*;

/// Tests that a created row reads back unchanged.
///
/// Verifies that every scalar field returned by POST matches the subsequent GET.
///
/// Expected: 201, then 200 with identical scalar fields
#[tokio::test]
async fn created_pokemon_reads_back_identically() -> Result<(), AppError> {
    let app = TestApp::new().await;
    let cookie = app.admin_cookie().await;
    let electric = factory::create_type(&app.db).await?;

    let (status, created) = app
        .post("/api/pokemon", Some(&cookie), pokemon_body(electric.id))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_relation_keys::<PokemonResource>(&created, false);

    let (status, read) = app
        .get(&format!("/api/pokemon/{}", created["id"]), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(read, created);
    assert_eq!(read["name"], "Pikachu");
    assert_eq!(read["speed"], 90);
    assert_eq!(read["secondaryTypeId"], Value::Null);
    assert_eq!(read["isActive"], true);

    Ok(())
}

/// Tests that reference data writes require an admin.
///
/// Expected: 401 anonymous, 403 regular user
#[tokio::test]
async fn reference_data_writes_require_admin() -> Result<(), AppError> {
    let app = TestApp::new().await;
    let user = factory::create_user(&app.db).await?;
    let cookie = app.login(user.id).await;
    let body = json!({ "name": "Fairy", "color": "#EE99AC" });

    let (status, _) = app.post("/api/pokemon-type", None, body.clone()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.post("/api/pokemon-type", Some(&cookie), body).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    Ok(())
}

/// Tests creating a duplicate natural key.
///
/// Expected: 409
#[tokio::test]
async fn duplicate_natural_key_returns_409() -> Result<(), AppError> {
    let app = TestApp::new().await;
    let cookie = app.admin_cookie().await;
    let body = json!({ "name": "Dragon", "color": "#7038F8" });

    let (status, _) = app
        .post("/api/pokemon-type", Some(&cookie), body.clone())
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, response) = app.post("/api/pokemon-type", Some(&cookie), body).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_error_body(&response, StatusCode::CONFLICT);

    Ok(())
}

/// Tests rejecting unknown and invalid input fields.
///
/// Expected: 400 for an unknown field, a bad color and a malformed body
#[tokio::test]
async fn invalid_bodies_return_400() -> Result<(), AppError> {
    let app = TestApp::new().await;
    let cookie = app.admin_cookie().await;

    for body in [
        json!({ "name": "Steel", "weakTo": "Fire" }),
        json!({ "name": "Steel", "color": "grey" }),
        json!({ "name": "" }),
        json!(["Steel"]),
    ] {
        let (status, response) = app.post("/api/pokemon-type", Some(&cookie), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_error_body(&response, StatusCode::BAD_REQUEST);
    }

    Ok(())
}

/// Tests creating a league.
///
/// Verifies that any logged in user may create a league and becomes its moderator, while
/// anonymous callers are rejected.
///
/// Expected: 401 anonymous; 201 and a moderator membership for the creator
#[tokio::test]
async fn league_creator_becomes_moderator() -> Result<(), AppError> {
    let app = TestApp::new().await;
    let user = factory::create_user(&app.db).await?;
    let cookie = app.login(user.id).await;
    let body = json!({ "name": "Orange Islands" });

    let (status, _) = app.post("/api/league", None, body.clone()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, league) = app.post("/api/league", Some(&cookie), body).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, me) = app.get("/api/auth/user", Some(&cookie)).await;
    assert_eq!(
        me["memberships"],
        json!([{ "leagueId": league["id"], "isModerator": true }])
    );

    Ok(())
}
