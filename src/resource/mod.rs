//! Per-table configuration of the generic repository, service and controller.
//!
//! A table becomes an API resource by implementing [`Resource`]: it names its input and output
//! shapes, validates them explicitly, declares filterable fields, natural keys and relations,
//! and states which permissions guard each action.

pub mod league;
pub mod league_match;
pub mod league_user;
pub mod pokemon;
pub mod pokemon_move;
pub mod pokemon_type;
pub mod season;
pub mod team;
pub mod type_effectiveness;
pub mod user;

pub use league::LeagueResource;
pub use league_match::MatchResource;
pub use league_user::LeagueUserResource;
pub use pokemon::PokemonResource;
pub use pokemon_move::MoveResource;
pub use pokemon_type::PokemonTypeResource;
pub use season::SeasonResource;
pub use team::TeamResource;
pub use type_effectiveness::TypeEffectivenessResource;
pub use user::UserResource;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    IntoActiveModel, ModelTrait,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    data::tracked::TrackedEntity,
    error::{internal::InternalError, AppError},
    middleware::auth::{Permission, SessionContext},
};

/// Column type of a resource's entity.
pub type Column<R> = <<R as Resource>::Entity as EntityTrait>::Column;

/// Operation requested on a resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    List,
    Read,
    Create,
    Update,
    Delete,
}

/// Whether the request came through `/api/<path>` or `/api/league/{leagueId}/<path>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteKind {
    TopLevel,
    Nested,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Int,
    Bool,
    Text,
}

/// Field that may be used as an equality filter or sort key in list queries.
pub struct Field<C: 'static> {
    /// camelCase query parameter name.
    pub name: &'static str,
    pub column: C,
    pub kind: FieldKind,
}

/// Natural key: no two active rows may share the values of all `columns`.
pub struct UniqueKey<C: 'static> {
    /// Human readable key name used in conflict messages.
    pub label: &'static str,
    pub columns: &'static [C],
}

#[async_trait]
pub trait Resource: Sized + Send + Sync + 'static {
    type Entity: TrackedEntity<Model = Self::Model, ActiveModel = Self::ActiveModel>;
    type Model: ModelTrait<Entity = Self::Entity>
        + FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + Clone
        + Send
        + Sync
        + 'static;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + Send
        + Sync
        + 'static;

    type Create: DeserializeOwned + Send + 'static;
    type Update: DeserializeOwned + Send + 'static;
    type Dto: Serialize;

    /// Lower case singular name used in messages, e.g. "pokemon type".
    const NAME: &'static str;

    /// Route segment under `/api`, e.g. "pokemon-type".
    const PATH: &'static str;

    /// Name of the path parameter carrying the id.
    const ID_PARAM: &'static str = "id";

    /// League column for resources that also live under `/api/league/{leagueId}/`.
    const SCOPE: Option<Column<Self>> = None;

    const FILTERS: &'static [Field<Column<Self>>] = &[];

    const UNIQUE: &'static [UniqueKey<Column<Self>>] = &[];

    /// Relations loaded for basic reads. Never exposed in the basic projection.
    const BASE_RELATIONS: &'static [&'static str] = &[];

    /// Relations loaded and exposed when `full=true`.
    const FULL_RELATIONS: &'static [&'static str] = &[];

    /// Permission chain guarding `action`. An empty chain is public.
    fn permissions(action: Action, route: RouteKind) -> &'static [Permission];

    fn to_dto(model: &Self::Model) -> Self::Dto;

    fn validate_create(input: &Self::Create) -> Result<(), AppError>;

    fn create_model(input: Self::Create) -> Self::ActiveModel;

    fn validate_update(input: &Self::Update) -> Result<(), AppError>;

    /// Active model with only the provided fields `Set`.
    fn update_model(input: Self::Update) -> Self::ActiveModel;

    /// Loads `relation` of `model` as JSON (array, object or null), active rows only.
    async fn load_relation(
        _db: &DatabaseConnection,
        _model: &Self::Model,
        relation: &str,
    ) -> Result<serde_json::Value, AppError> {
        unknown_relation::<Self>(relation)
    }

    /// Cross-row checks on the complete row about to be written, e.g. that referenced rows
    /// are active and belong to the same league.
    async fn check_integrity(
        _db: &DatabaseConnection,
        _active: &Self::ActiveModel,
    ) -> Result<(), AppError> {
        Ok(())
    }

    /// Names of the dependent categories that still have active rows and therefore block
    /// deleting `model`.
    async fn blocking_dependents(
        _db: &DatabaseConnection,
        _model: &Self::Model,
    ) -> Result<Vec<&'static str>, AppError> {
        Ok(Vec::new())
    }

    async fn after_create(
        _db: &DatabaseConnection,
        _model: &Self::Model,
        _actor: Option<&SessionContext>,
    ) -> Result<(), AppError> {
        Ok(())
    }

    /// Runs after `model` was soft-deleted, e.g. to deactivate rows that only exist
    /// alongside it.
    async fn after_delete(_db: &DatabaseConnection, _model: &Self::Model) -> Result<(), AppError> {
        Ok(())
    }
}

/// Relations to load for the given view.
pub fn relations_for<R: Resource>(view: crate::model::query::View) -> &'static [&'static str] {
    match view {
        crate::model::query::View::Basic => R::BASE_RELATIONS,
        crate::model::query::View::Full => R::FULL_RELATIONS,
    }
}

pub(crate) fn unknown_relation<R: Resource>(relation: &str) -> Result<serde_json::Value, AppError> {
    Err(InternalError::UnknownRelation {
        resource: R::NAME,
        relation: relation.to_string(),
    }
    .into())
}

/// Value held by a column of an active model, or an internal error when it was never set.
pub(crate) fn column_value<T: Clone + Into<sea_orm::Value>>(
    resource: &'static str,
    column: &'static str,
    value: &sea_orm::ActiveValue<T>,
) -> Result<T, AppError> {
    match value {
        sea_orm::ActiveValue::Set(v) | sea_orm::ActiveValue::Unchanged(v) => Ok(v.clone()),
        sea_orm::ActiveValue::NotSet => {
            Err(InternalError::MissingColumnValue { resource, column }.into())
        }
    }
}

/// Loads the active row of `R` referenced by `field`.
///
/// # Returns
/// - `Ok(Model)` - Referenced row
/// - `Err(AppError::Validation)` - No active row with that id
pub(crate) async fn require_active<R: Resource>(
    db: &DatabaseConnection,
    id: i32,
    field: &str,
) -> Result<R::Model, AppError> {
    let repo = crate::data::resource::ResourceRepository::<R>::new(db);

    match repo
        .find_one(id, &crate::model::query::Filter::new(), &[])
        .await
    {
        Ok(record) => Ok(record.model),
        Err(AppError::NotFound(_)) => Err(AppError::Validation(format!(
            "{} {} does not reference an active {}",
            field,
            id,
            R::NAME
        ))),
        Err(err) => Err(err),
    }
}
