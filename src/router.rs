use axum::{routing::get, Router};

use crate::{
    controller::{
        auth::{get_user, logout},
        resource::routes,
    },
    error::AppError,
    resource::{
        LeagueResource, LeagueUserResource, MatchResource, MoveResource, PokemonResource,
        PokemonTypeResource, SeasonResource, TeamResource, TypeEffectivenessResource,
        UserResource,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/user", get(get_user))
        .route("/api/auth/logout", get(logout))
        .merge(routes::<UserResource>())
        .merge(routes::<LeagueResource>())
        .merge(routes::<LeagueUserResource>())
        .merge(routes::<SeasonResource>())
        .merge(routes::<TeamResource>())
        .merge(routes::<MatchResource>())
        .merge(routes::<PokemonTypeResource>())
        .merge(routes::<MoveResource>())
        .merge(routes::<TypeEffectivenessResource>())
        .merge(routes::<PokemonResource>())
        .fallback(route_not_found)
}

async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
