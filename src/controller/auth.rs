use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
    model::user::{CurrentUserDto, MembershipDto},
    resource::{Resource, UserResource},
    state::AppState,
};

/// Returns the logged in user with their league memberships.
///
/// # Access Control
/// - `Authenticated`
///
/// # Returns
/// - `200 OK` - Current user
/// - `401 Unauthorized` - No active user in session
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let context = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Authenticated])
        .await?;

    let user = UserRepository::new(&state.db)
        .find_active_by_id(context.user_id)
        .await?
        .ok_or(AuthError::UserNotInSession)?;

    let dto = CurrentUserDto {
        user: UserResource::to_dto(&user),
        memberships: context
            .memberships
            .iter()
            .map(|m| MembershipDto {
                league_id: m.league_id,
                is_moderator: m.is_moderator,
            })
            .collect(),
    };

    Ok((StatusCode::OK, Json(dto)))
}

/// Ends the session.
///
/// # Returns
/// - `204 No Content` - Always, whether or not a user was logged in
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    let auth_session = AuthSession::new(&session);

    if let Some(user_id) = auth_session.get_user_id().await? {
        tracing::debug!("User {} logged out", user_id);
    }
    auth_session.clear().await;

    Ok(StatusCode::NO_CONTENT)
}
