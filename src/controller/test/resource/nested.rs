use super::*;

/// Tests reading through the wrong league.
///
/// Verifies that a nested route never exposes a row of another league.
///
/// Expected: 404 through the other league, 200 through its own
#[tokio::test]
async fn row_of_other_league_returns_404() -> Result<(), AppError> {
    let app = TestApp::new().await;
    let (league, season) = factory::helpers::create_league_with_season(&app.db).await?;
    let other = factory::create_league(&app.db).await?;

    let (status, _) = app
        .get(&format!("/api/league/{}/season/{}", other.id, season.id), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app
        .get(
            &format!("/api/league/{}/season/{}", league.id, season.id),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["leagueId"], league.id);

    Ok(())
}

/// Tests that nested lists only contain rows of the path league.
///
/// Expected: one season per league
#[tokio::test]
async fn nested_list_is_scoped() -> Result<(), AppError> {
    let app = TestApp::new().await;
    let (league, _) = factory::helpers::create_league_with_season(&app.db).await?;
    factory::helpers::create_league_with_season(&app.db).await?;

    let (status, body) = app
        .get(&format!("/api/league/{}/season", league.id), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["leagueId"], league.id);

    Ok(())
}

/// Tests creating a team through its league.
///
/// Verifies that league members may enter a team and the league comes from the path.
///
/// Expected: 403 for an outsider, 201 for a member
#[tokio::test]
async fn member_creates_team_in_league() -> Result<(), AppError> {
    let app = TestApp::new().await;
    let (league, season) = factory::helpers::create_league_with_season(&app.db).await?;
    let member = factory::create_user(&app.db).await?;
    let outsider = factory::create_user(&app.db).await?;
    factory::create_member(&app.db, league.id, member.id).await?;

    let uri = format!("/api/league/{}/team", league.id);

    let outsider_cookie = app.login(outsider.id).await;
    let (status, _) = app
        .post(
            &uri,
            Some(&outsider_cookie),
            json!({ "seasonId": season.id, "coachId": outsider.id, "name": "Gatecrashers" }),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let member_cookie = app.login(member.id).await;
    let (status, team) = app
        .post(
            &uri,
            Some(&member_cookie),
            json!({ "seasonId": season.id, "coachId": member.id, "name": "Vermilion Volts" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(team["leagueId"], league.id);
    assert_eq!(team["coachId"], member.id);

    Ok(())
}

/// Tests membership listing permissions.
///
/// Expected: 403 for non-members, 200 for members of the league
#[tokio::test]
async fn members_list_requires_membership() -> Result<(), AppError> {
    let app = TestApp::new().await;
    let league = factory::create_league(&app.db).await?;
    let member = factory::create_user(&app.db).await?;
    let outsider = factory::create_user(&app.db).await?;
    factory::create_member(&app.db, league.id, member.id).await?;

    let uri = format!("/api/league/{}/league-user", league.id);

    let outsider_cookie = app.login(outsider.id).await;
    let (status, _) = app.get(&uri, Some(&outsider_cookie)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let member_cookie = app.login(member.id).await;
    let (status, body) = app.get(&uri, Some(&member_cookie)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);

    Ok(())
}

/// Tests moderator-only writes on nested routes.
///
/// Expected: 403 for a member deleting a season, 204 for the moderator
#[tokio::test]
async fn moderator_deletes_season() -> Result<(), AppError> {
    let app = TestApp::new().await;
    let (league, season) = factory::helpers::create_league_with_season(&app.db).await?;
    let member = factory::create_user(&app.db).await?;
    let moderator = factory::create_user(&app.db).await?;
    factory::create_member(&app.db, league.id, member.id).await?;
    factory::create_moderator(&app.db, league.id, moderator.id).await?;

    let uri = format!("/api/league/{}/season/{}", league.id, season.id);

    let member_cookie = app.login(member.id).await;
    let (status, _) = app.delete(&uri, Some(&member_cookie)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let moderator_cookie = app.login(moderator.id).await;
    let (status, _) = app.delete(&uri, Some(&moderator_cookie)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    Ok(())
}
