use super::*;

fn params(pairs: &[(&'static str, &str)]) -> HashMap<&'static str, String> {
    pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
}

/// Tests that an empty chain is public.
///
/// Expected: Ok without a session context
#[test]
fn empty_chain_passes_without_session() {
    let params = params(&[]);
    let scope = GuardScope {
        params: &params,
        resource: None,
    };

    assert!(authorize(None, &[], &scope).is_ok());
}

/// Tests that every permission requires a session.
///
/// Expected: Err(AuthError::UserNotInSession) for each permission kind
#[test]
fn requires_session_for_any_permission() {
    let params = params(&[("leagueId", "1")]);
    let scope = GuardScope {
        params: &params,
        resource: None,
    };

    for permission in [
        Permission::Authenticated,
        Permission::Admin,
        Permission::LeagueMember("leagueId"),
        Permission::LeagueModerator("leagueId"),
        Permission::ResourceOwner("coachId"),
    ] {
        let result = authorize(None, &[permission], &scope);
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::UserNotInSession))
        ));
    }
}

/// Tests the admin permission.
///
/// Expected: Ok for admins, AccessDenied for others
#[test]
fn checks_admin_flag() {
    let params = params(&[]);
    let scope = GuardScope {
        params: &params,
        resource: None,
    };

    assert!(authorize(Some(&admin(1)), &[Permission::Admin], &scope).is_ok());
    assert_denied(authorize(
        Some(&member_of(2, 1, true)),
        &[Permission::Admin],
        &scope,
    ));
}

/// Tests league membership read from the path.
///
/// Verifies that members pass membership checks, only moderators pass moderator checks,
/// and admins pass both.
///
/// Expected: Ok/AccessDenied per role
#[test]
fn checks_league_roles_from_path() {
    let params = params(&[("leagueId", "5")]);
    let scope = GuardScope {
        params: &params,
        resource: None,
    };
    let member = member_of(1, 5, false);
    let moderator = member_of(2, 5, true);
    let outsider = member_of(3, 6, true);

    let as_member = [Permission::LeagueMember("leagueId")];
    let as_moderator = [Permission::LeagueModerator("leagueId")];

    assert!(authorize(Some(&member), &as_member, &scope).is_ok());
    assert!(authorize(Some(&moderator), &as_member, &scope).is_ok());
    assert_denied(authorize(Some(&outsider), &as_member, &scope));

    assert!(authorize(Some(&moderator), &as_moderator, &scope).is_ok());
    assert_denied(authorize(Some(&member), &as_moderator, &scope));
    assert_denied(authorize(Some(&outsider), &as_moderator, &scope));

    assert!(authorize(Some(&admin(4)), &as_moderator, &scope).is_ok());
}

/// Tests league membership read from the target resource.
///
/// Verifies that without a path parameter the league id comes from the loaded resource.
///
/// Expected: Ok for the moderator of the resource's league
#[test]
fn reads_league_from_resource() {
    let params = params(&[("id", "10")]);
    let resource = serde_json::json!({ "id": 10, "leagueId": 5 });
    let scope = GuardScope {
        params: &params,
        resource: Some(&resource),
    };

    let chain = [Permission::LeagueModerator("leagueId")];
    assert!(authorize(Some(&member_of(1, 5, true)), &chain, &scope).is_ok());
    assert_denied(authorize(Some(&member_of(1, 6, true)), &chain, &scope));
}

/// Tests a non-numeric league parameter.
///
/// Expected: Err(AppError::Validation)
#[test]
fn rejects_non_numeric_league_param() {
    let params = params(&[("leagueId", "kanto")]);
    let scope = GuardScope {
        params: &params,
        resource: None,
    };

    let result = authorize(
        Some(&member_of(1, 5, true)),
        &[Permission::LeagueMember("leagueId")],
        &scope,
    );

    assert!(matches!(result, Err(AppError::Validation(_))));
}

/// Tests resource ownership.
///
/// Verifies that the owner passes, another user is denied, an admin bypasses the check
/// and a missing resource is reported as not found.
///
/// Expected: Ok/AccessDenied/Ok/NotFound
#[test]
fn checks_resource_owner() {
    let params = params(&[("id", "3")]);
    let team = serde_json::json!({ "id": 3, "leagueId": 5, "coachId": 1 });
    let with_team = GuardScope {
        params: &params,
        resource: Some(&team),
    };
    let without_team = GuardScope {
        params: &params,
        resource: None,
    };
    let chain = [Permission::ResourceOwner("coachId")];

    assert!(authorize(Some(&member_of(1, 5, false)), &chain, &with_team).is_ok());
    assert_denied(authorize(Some(&member_of(2, 5, false)), &chain, &with_team));
    assert!(authorize(Some(&admin(9)), &chain, &with_team).is_ok());
    assert!(matches!(
        authorize(Some(&member_of(1, 5, false)), &chain, &without_team),
        Err(AppError::NotFound(_))
    ));
}

/// Tests that a chain stops at the first failing permission.
///
/// Verifies that the coach of a team who left the league is denied by the membership
/// check even though the ownership check would pass.
///
/// Expected: AccessDenied
#[test]
fn requires_every_permission_in_chain() {
    let params = params(&[("id", "3")]);
    let team = serde_json::json!({ "id": 3, "leagueId": 5, "coachId": 1 });
    let scope = GuardScope {
        params: &params,
        resource: Some(&team),
    };
    let chain = [
        Permission::LeagueMember("leagueId"),
        Permission::ResourceOwner("coachId"),
    ];

    assert!(authorize(Some(&member_of(1, 5, false)), &chain, &scope).is_ok());
    assert_denied(authorize(Some(&member_of(1, 6, false)), &chain, &scope));
}

/// Tests which permissions need the target resource loaded.
///
/// Expected: only ownership and league checks without a matching path parameter
#[test]
fn reports_resource_needs() {
    let nested = params(&[("leagueId", "1"), ("id", "2")]);
    let top_level = params(&[("id", "2")]);

    assert!(!Permission::Admin.needs_resource(&top_level));
    assert!(!Permission::LeagueModerator("leagueId").needs_resource(&nested));
    assert!(Permission::LeagueModerator("leagueId").needs_resource(&top_level));
    assert!(Permission::ResourceOwner("coachId").needs_resource(&nested));
}
