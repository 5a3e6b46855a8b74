use super::*;

/// Tests league updates by role.
///
/// Expected: 401 anonymous, 403 non-moderator, 200 moderator
#[tokio::test]
async fn league_update_requires_moderator() -> Result<(), AppError> {
    let app = TestApp::new().await;
    let league = factory::create_league(&app.db).await?;
    let member = factory::create_user(&app.db).await?;
    let moderator = factory::create_user(&app.db).await?;
    factory::create_member(&app.db, league.id, member.id).await?;
    factory::create_moderator(&app.db, league.id, moderator.id).await?;

    let uri = format!("/api/league/{}", league.id);
    let body = json!({ "description": "Double battles only" });

    let (status, _) = app.put(&uri, None, body.clone()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let member_cookie = app.login(member.id).await;
    let (status, _) = app.put(&uri, Some(&member_cookie), body.clone()).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let moderator_cookie = app.login(moderator.id).await;
    let (status, updated) = app.put(&uri, Some(&moderator_cookie), body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["description"], "Double battles only");
    assert_eq!(updated["name"], league.name);

    Ok(())
}

/// Tests team renames by role.
///
/// Verifies that the coach may rename their own team and another member of the same
/// league may not.
///
/// Expected: 200 for the coach, 403 for the other member
#[tokio::test]
async fn coach_may_update_own_team() -> Result<(), AppError> {
    let app = TestApp::new().await;
    let (league, season) = factory::helpers::create_league_with_season(&app.db).await?;
    let coach = factory::create_user(&app.db).await?;
    let rival = factory::create_user(&app.db).await?;
    factory::create_member(&app.db, league.id, coach.id).await?;
    factory::create_member(&app.db, league.id, rival.id).await?;
    let team = factory::create_team(&app.db, &season, coach.id).await?;

    let uri = format!("/api/team/{}", team.id);

    let rival_cookie = app.login(rival.id).await;
    let (status, _) = app
        .put(&uri, Some(&rival_cookie), json!({ "name": "Stolen" }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let coach_cookie = app.login(coach.id).await;
    let (status, updated) = app
        .put(&uri, Some(&coach_cookie), json!({ "name": "Cerulean Starmies" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Cerulean Starmies");

    Ok(())
}

/// Tests the full projection on update responses.
///
/// Expected: 200 with the declared relations when `full=true`
#[tokio::test]
async fn update_honors_full_flag() -> Result<(), AppError> {
    let app = TestApp::new().await;
    let cookie = app.admin_cookie().await;
    let league = factory::create_league(&app.db).await?;

    let (status, body) = app
        .put(
            &format!("/api/league/{}?full=true", league.id),
            Some(&cookie),
            json!({ "name": "Battle Frontier" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_relation_keys::<LeagueResource>(&body, true);

    Ok(())
}
