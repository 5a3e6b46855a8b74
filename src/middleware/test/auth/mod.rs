use super::*;

mod authorize;

fn member_of(user_id: i32, league_id: i32, is_moderator: bool) -> SessionContext {
    SessionContext {
        user_id,
        admin: false,
        memberships: vec![Membership {
            league_id,
            is_moderator,
        }],
    }
}

fn admin(user_id: i32) -> SessionContext {
    SessionContext {
        user_id,
        admin: true,
        memberships: Vec::new(),
    }
}

fn assert_denied(result: Result<(), AppError>) {
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
}
