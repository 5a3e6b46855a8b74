//! Generic CRUD handlers.
//!
//! `routes::<R>()` mounts the five handlers of a resource under `/api/<path>`, and again under
//! `/api/league/{leagueId}/<path>` when the resource is league-scoped. Both mounts share the
//! same handler bodies; the nested one adds the league id as a filter on reads, updates and
//! deletes, and as the league of created rows.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_sessions::Session;

use crate::{
    data::resource::Record,
    error::AppError,
    middleware::auth::{authorize, AuthGuard, GuardScope, SessionContext},
    model::query::{Filter, View},
    resource::{Action, Resource, RouteKind},
    service::resource::ResourceService,
    state::AppState,
    util::parse::{parse_body, parse_id, parse_list_query, parse_view},
};

const LEAGUE_PARAM: &str = "leagueId";

pub fn routes<R: Resource>() -> Router<AppState> {
    let collection = format!("/api/{}", R::PATH);
    let item = format!("/api/{}/{{{}}}", R::PATH, R::ID_PARAM);

    let router = Router::new()
        .route(&collection, get(list::<R>).post(create::<R>))
        .route(&item, get(read::<R>).put(update::<R>).delete(delete::<R>));

    if R::SCOPE.is_none() {
        return router;
    }

    let nested_collection = format!("/api/league/{{{}}}/{}", LEAGUE_PARAM, R::PATH);
    let nested_item = format!("{}/{{id}}", nested_collection);

    router
        .route(
            &nested_collection,
            get(list_nested::<R>).post(create_nested::<R>),
        )
        .route(
            &nested_item,
            get(read_nested::<R>)
                .put(update_nested::<R>)
                .delete(delete_nested::<R>),
        )
}

/// Path parameters of a request, by name, plus the kind of route that matched.
pub struct RouteParams {
    pub kind: RouteKind,
    pub values: HashMap<&'static str, String>,
}

impl RouteParams {
    fn collection() -> Self {
        Self {
            kind: RouteKind::TopLevel,
            values: HashMap::new(),
        }
    }

    fn item<R: Resource>(id: String) -> Self {
        Self {
            kind: RouteKind::TopLevel,
            values: HashMap::from([(R::ID_PARAM, id)]),
        }
    }

    fn nested_collection(league_id: String) -> Self {
        Self {
            kind: RouteKind::Nested,
            values: HashMap::from([(LEAGUE_PARAM, league_id)]),
        }
    }

    fn nested_item(league_id: String, id: String) -> Self {
        Self {
            kind: RouteKind::Nested,
            values: HashMap::from([(LEAGUE_PARAM, league_id), ("id", id)]),
        }
    }

    /// The id of the targeted row, parsed before any storage access.
    fn id<R: Resource>(&self) -> Result<i32, AppError> {
        let param = match self.kind {
            RouteKind::TopLevel => R::ID_PARAM,
            RouteKind::Nested => "id",
        };
        let raw = self.values.get(param).map(String::as_str).unwrap_or_default();

        parse_id(param, raw)
    }

    /// League id of a nested route.
    fn scope(&self) -> Result<Option<i32>, AppError> {
        match self.kind {
            RouteKind::TopLevel => Ok(None),
            RouteKind::Nested => {
                let raw = self
                    .values
                    .get(LEAGUE_PARAM)
                    .map(String::as_str)
                    .unwrap_or_default();
                parse_id(LEAGUE_PARAM, raw).map(Some)
            }
        }
    }
}

/// Filter restricting a nested route to its league.
fn scope_filter<R: Resource>(scope: Option<i32>) -> Filter<R::Entity> {
    match (R::SCOPE, scope) {
        (Some(column), Some(league_id)) => Filter::new().eq(column, league_id),
        _ => Filter::new(),
    }
}

/// Basic projection, plus one key per loaded relation when `view` is full.
pub fn project<R: Resource>(record: Record<R>, view: View) -> Result<serde_json::Value, AppError> {
    let mut value = serde_json::to_value(R::to_dto(&record.model))?;

    if view == View::Full {
        if let serde_json::Value::Object(map) = &mut value {
            for (name, relation) in record.relations {
                map.insert(name.to_string(), relation);
            }
        }
    }

    Ok(value)
}

/// Resolves the caller and evaluates the permission chain of `action`.
///
/// The target row is loaded (basic projection) only when the chain needs it and there is a
/// caller to check it against.
async fn guard<R: Resource>(
    state: &AppState,
    session: &Session,
    action: Action,
    params: &RouteParams,
    target: Option<(i32, &Filter<R::Entity>)>,
) -> Result<Option<SessionContext>, AppError> {
    let permissions = R::permissions(action, params.kind);
    if permissions.is_empty() {
        return Ok(None);
    }

    let context = AuthGuard::new(&state.db, session).context().await?;

    let needs_resource = permissions
        .iter()
        .any(|permission| permission.needs_resource(&params.values));

    let resource = match (target, &context) {
        (Some((id, filter)), Some(_)) if needs_resource => {
            let record = ResourceService::<R>::new(&state.db)
                .find_one(id, filter, View::Basic)
                .await?;
            Some(project(record, View::Basic)?)
        }
        _ => None,
    };

    authorize(
        context.as_ref(),
        permissions,
        &GuardScope {
            params: &params.values,
            resource: resource.as_ref(),
        },
    )?;

    Ok(context)
}

async fn list_resources<R: Resource>(
    state: AppState,
    session: Session,
    params: RouteParams,
    query: HashMap<String, String>,
) -> Result<Response, AppError> {
    let scope = params.scope()?;

    guard::<R>(&state, &session, Action::List, &params, None).await?;

    let mut list = parse_list_query::<R>(&query)?;
    if let (Some(column), Some(league_id)) = (R::SCOPE, scope) {
        list.filter.push(column, league_id);
    }

    let page = ResourceService::<R>::new(&state.db)
        .find_page(&list.filter, &list.sort, list.pagination, list.view)
        .await?;

    let view = list.view;
    let page = page.try_map(|record| project(record, view))?;

    Ok((StatusCode::OK, Json(page)).into_response())
}

async fn read_resource<R: Resource>(
    state: AppState,
    session: Session,
    params: RouteParams,
    query: HashMap<String, String>,
) -> Result<Response, AppError> {
    let id = params.id::<R>()?;
    let filter = scope_filter::<R>(params.scope()?);

    guard::<R>(&state, &session, Action::Read, &params, Some((id, &filter))).await?;

    let view = parse_view(&query)?;
    let record = ResourceService::<R>::new(&state.db)
        .find_one(id, &filter, view)
        .await?;

    Ok((StatusCode::OK, Json(project(record, view)?)).into_response())
}

async fn create_resource<R: Resource>(
    state: AppState,
    session: Session,
    params: RouteParams,
    body: Bytes,
) -> Result<Response, AppError> {
    let scope = params.scope()?;

    let context = guard::<R>(&state, &session, Action::Create, &params, None).await?;

    let input: R::Create = parse_body(&body)?;
    let record = ResourceService::<R>::new(&state.db)
        .create(input, scope, context.as_ref())
        .await?;

    Ok((StatusCode::CREATED, Json(project(record, View::Basic)?)).into_response())
}

async fn update_resource<R: Resource>(
    state: AppState,
    session: Session,
    params: RouteParams,
    query: HashMap<String, String>,
    body: Bytes,
) -> Result<Response, AppError> {
    let id = params.id::<R>()?;
    let filter = scope_filter::<R>(params.scope()?);

    guard::<R>(&state, &session, Action::Update, &params, Some((id, &filter))).await?;

    let view = parse_view(&query)?;
    let input: R::Update = parse_body(&body)?;
    let record = ResourceService::<R>::new(&state.db)
        .update(id, input, &filter, view)
        .await?;

    Ok((StatusCode::OK, Json(project(record, view)?)).into_response())
}

async fn delete_resource<R: Resource>(
    state: AppState,
    session: Session,
    params: RouteParams,
) -> Result<Response, AppError> {
    let id = params.id::<R>()?;
    let filter = scope_filter::<R>(params.scope()?);

    guard::<R>(&state, &session, Action::Delete, &params, Some((id, &filter))).await?;

    ResourceService::<R>::new(&state.db)
        .delete(id, &filter)
        .await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// List active rows.
///
/// # Query
/// - `page`, `pageSize` - 1-based pagination, defaults 1 and 20
/// - `sortBy`, `sortOrder` - filterable field or `id`/`createdAt`/`updatedAt`; `asc`/`desc`
/// - `full` - include every declared relation
/// - any filterable field - equality filter
///
/// # Returns
/// - `200 OK` - `{data, total, page, pageSize}`
/// - `400 Bad Request` - Malformed query parameter or page/pageSize below 1
pub async fn list<R: Resource>(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Response, AppError> {
    list_resources::<R>(state, session, RouteParams::collection(), query).await
}

pub async fn list_nested<R: Resource>(
    State(state): State<AppState>,
    session: Session,
    Path(league_id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Response, AppError> {
    list_resources::<R>(state, session, RouteParams::nested_collection(league_id), query).await
}

/// Fetch one active row.
///
/// # Returns
/// - `200 OK` - Basic projection, or full projection with `full=true`
/// - `400 Bad Request` - Id is not an integer
/// - `404 Not Found` - No active row with that id (in that league, for nested routes)
pub async fn read<R: Resource>(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Response, AppError> {
    read_resource::<R>(state, session, RouteParams::item::<R>(id), query).await
}

pub async fn read_nested<R: Resource>(
    State(state): State<AppState>,
    session: Session,
    Path((league_id, id)): Path<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Response, AppError> {
    read_resource::<R>(state, session, RouteParams::nested_item(league_id, id), query).await
}

/// Create a row.
///
/// # Returns
/// - `201 Created` - Basic projection of the new row
/// - `400 Bad Request` - Malformed body, unknown field or failed validation
/// - `401 Unauthorized` / `403 Forbidden` - Permission chain rejected the caller
/// - `409 Conflict` - Natural key already used by an active row
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    session: Session,
    body: Bytes,
) -> Result<Response, AppError> {
    create_resource::<R>(state, session, RouteParams::collection(), body).await
}

pub async fn create_nested<R: Resource>(
    State(state): State<AppState>,
    session: Session,
    Path(league_id): Path<String>,
    body: Bytes,
) -> Result<Response, AppError> {
    create_resource::<R>(state, session, RouteParams::nested_collection(league_id), body).await
}

/// Partially update a row.
///
/// # Returns
/// - `200 OK` - Updated row, full projection with `full=true`
/// - `400` / `401` / `403` / `404` / `409` - As for read and create
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Result<Response, AppError> {
    update_resource::<R>(state, session, RouteParams::item::<R>(id), query, body).await
}

pub async fn update_nested<R: Resource>(
    State(state): State<AppState>,
    session: Session,
    Path((league_id, id)): Path<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Result<Response, AppError> {
    update_resource::<R>(
        state,
        session,
        RouteParams::nested_item(league_id, id),
        query,
        body,
    )
    .await
}

/// Soft-delete a row.
///
/// # Returns
/// - `204 No Content` - Row deactivated
/// - `409 Conflict` - Active dependents still reference the row
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    delete_resource::<R>(state, session, RouteParams::item::<R>(id)).await
}

pub async fn delete_nested<R: Resource>(
    State(state): State<AppState>,
    session: Session,
    Path((league_id, id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    delete_resource::<R>(state, session, RouteParams::nested_item(league_id, id)).await
}
