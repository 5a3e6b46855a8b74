//! Permission chain.
//!
//! A request is authorized in two steps. `AuthGuard::context` resolves the session into a
//! [`SessionContext`] once per request, then [`authorize`] evaluates a list of
//! [`Permission`]s against that context left to right, stopping at the first failure.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::{league_user::LeagueUserRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Permission {
    /// A logged in, active user.
    Authenticated,
    /// The global admin flag.
    Admin,
    /// Moderator of the league whose id is read from the named path parameter, or from the
    /// same-named field of the target resource.
    LeagueModerator(&'static str),
    /// Member (moderator or not) of the league identified like `LeagueModerator`.
    LeagueMember(&'static str),
    /// The named field of the target resource holds the user's id.
    ResourceOwner(&'static str),
}

impl Permission {
    /// Whether evaluating this permission may need the target resource, given the path
    /// parameters of the request.
    pub fn needs_resource(&self, params: &HashMap<&'static str, String>) -> bool {
        match self {
            Self::Authenticated | Self::Admin => false,
            Self::LeagueModerator(param) | Self::LeagueMember(param) => {
                !params.contains_key(param)
            }
            Self::ResourceOwner(_) => true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Membership {
    pub league_id: i32,
    pub is_moderator: bool,
}

/// Who is calling, resolved from the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionContext {
    pub user_id: i32,
    pub admin: bool,
    pub memberships: Vec<Membership>,
}

impl SessionContext {
    pub fn is_member(&self, league_id: i32) -> bool {
        self.memberships.iter().any(|m| m.league_id == league_id)
    }

    pub fn is_moderator(&self, league_id: i32) -> bool {
        self.memberships
            .iter()
            .any(|m| m.league_id == league_id && m.is_moderator)
    }
}

/// What a permission chain is evaluated against, besides the caller.
pub struct GuardScope<'a> {
    /// Path parameters of the request by name.
    pub params: &'a HashMap<&'static str, String>,
    /// Basic projection of the target resource, when it was loaded.
    pub resource: Option<&'a serde_json::Value>,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session into a context.
    ///
    /// # Returns
    /// - `Ok(Some(context))` - Session holds an active user
    /// - `Ok(None)` - No user in the session, or the user is unknown or deactivated
    /// - `Err(AppError)` - Session store or database failure
    pub async fn context(&self) -> Result<Option<SessionContext>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        let Some(user) = UserRepository::new(self.db)
            .find_active_by_id(user_id)
            .await?
        else {
            tracing::debug!("Session references missing or inactive user {}", user_id);
            return Ok(None);
        };

        let memberships = LeagueUserRepository::new(self.db)
            .find_by_user(user.id)
            .await?
            .into_iter()
            .map(|m| Membership {
                league_id: m.league_id,
                is_moderator: m.is_moderator,
            })
            .collect();

        Ok(Some(SessionContext {
            user_id: user.id,
            admin: user.admin,
            memberships,
        }))
    }

    /// Resolves the context and evaluates `permissions` without path parameters or target
    /// resource.
    ///
    /// # Returns
    /// - `Ok(SessionContext)` - Caller passed every permission
    /// - `Err(AppError::AuthErr(UserNotInSession))` - No active user in session
    /// - `Err(AppError::AuthErr(AccessDenied))` - A permission was not satisfied
    pub async fn require(&self, permissions: &[Permission]) -> Result<SessionContext, AppError> {
        let context = self.context().await?;

        let params = HashMap::new();
        authorize(
            context.as_ref(),
            permissions,
            &GuardScope {
                params: &params,
                resource: None,
            },
        )?;

        context.ok_or_else(|| AuthError::UserNotInSession.into())
    }
}

/// Evaluates `permissions` left to right.
///
/// Every permission requires a session context. Admins pass every league and ownership
/// check. An empty chain always passes.
///
/// # Returns
/// - `Ok(())` - All permissions satisfied
/// - `Err(AppError::AuthErr(UserNotInSession))` - 401, no context
/// - `Err(AppError::AuthErr(AccessDenied))` - 403
/// - `Err(AppError::Validation)` - League id is not numeric
/// - `Err(AppError::NotFound)` - Ownership check without a loaded resource
pub fn authorize(
    context: Option<&SessionContext>,
    permissions: &[Permission],
    scope: &GuardScope<'_>,
) -> Result<(), AppError> {
    for permission in permissions {
        let Some(context) = context else {
            return Err(AuthError::UserNotInSession.into());
        };

        match *permission {
            Permission::Authenticated => {}
            Permission::Admin => {
                if !context.admin {
                    return Err(AuthError::AccessDenied(
                        context.user_id,
                        "admin permission required".to_string(),
                    )
                    .into());
                }
            }
            Permission::LeagueModerator(param) => {
                let league_id = league_id(scope, param)?;
                if !context.admin && !context.is_moderator(league_id) {
                    return Err(AuthError::AccessDenied(
                        context.user_id,
                        format!("not a moderator of league {}", league_id),
                    )
                    .into());
                }
            }
            Permission::LeagueMember(param) => {
                let league_id = league_id(scope, param)?;
                if !context.admin && !context.is_member(league_id) {
                    return Err(AuthError::AccessDenied(
                        context.user_id,
                        format!("not a member of league {}", league_id),
                    )
                    .into());
                }
            }
            Permission::ResourceOwner(field) => {
                let Some(resource) = scope.resource else {
                    return Err(AppError::NotFound("Resource not found".to_string()));
                };
                if context.admin {
                    continue;
                }

                let owner = resource.get(field).and_then(serde_json::Value::as_i64);
                if owner != Some(i64::from(context.user_id)) {
                    return Err(AuthError::AccessDenied(
                        context.user_id,
                        format!("does not own the resource through '{}'", field),
                    )
                    .into());
                }
            }
        }
    }

    Ok(())
}

/// League id named by `param`, from the path first and the loaded resource second.
fn league_id(scope: &GuardScope<'_>, param: &str) -> Result<i32, AppError> {
    if let Some(raw) = scope.params.get(param) {
        return raw
            .parse::<i32>()
            .map_err(|_| AppError::Validation(format!("Invalid {}: '{}'", param, raw)));
    }

    let from_resource = scope
        .resource
        .and_then(|resource| resource.get(param))
        .and_then(serde_json::Value::as_i64)
        .and_then(|id| i32::try_from(id).ok());

    from_resource.ok_or_else(|| AppError::Validation(format!("Missing league scope '{}'", param)))
}
