use crate::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{authorize, AuthGuard, GuardScope, Membership, Permission, SessionContext},
        session::AuthSession,
    },
};
use std::collections::HashMap;
use test_utils::{builder::TestBuilder, factory};

mod auth;
