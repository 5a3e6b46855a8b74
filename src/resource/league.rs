use async_trait::async_trait;
use entity::{league, league_user, season, team};
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection};

use crate::{
    data::{
        league_user::LeagueUserRepository,
        resource::{has_active, related_many, ResourceRepository},
    },
    error::AppError,
    middleware::auth::{Permission, SessionContext},
    model::league::{CreateLeagueDto, LeagueDto, UpdateLeagueDto},
    resource::{
        unknown_relation, Action, Field, FieldKind, LeagueUserResource, Resource, RouteKind,
        SeasonResource, TeamResource, UniqueKey,
    },
    util::validate::{
        optional, require_max_length, require_text, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH,
    },
};

pub struct LeagueResource;

#[async_trait]
impl Resource for LeagueResource {
    type Entity = league::Entity;
    type Model = league::Model;
    type ActiveModel = league::ActiveModel;
    type Create = CreateLeagueDto;
    type Update = UpdateLeagueDto;
    type Dto = LeagueDto;

    const NAME: &'static str = "league";
    const PATH: &'static str = "league";

    // Shared with the league-nested routes so moderator checks read the same parameter.
    const ID_PARAM: &'static str = "leagueId";

    const FILTERS: &'static [Field<league::Column>] = &[Field {
        name: "name",
        column: league::Column::Name,
        kind: FieldKind::Text,
    }];

    const UNIQUE: &'static [UniqueKey<league::Column>] = &[UniqueKey {
        label: "name",
        columns: &[league::Column::Name],
    }];

    const FULL_RELATIONS: &'static [&'static str] = &["seasons", "teams", "members"];

    fn permissions(action: Action, _route: RouteKind) -> &'static [Permission] {
        match action {
            Action::List | Action::Read => &[],
            Action::Create => &[Permission::Authenticated],
            Action::Update => &[Permission::LeagueModerator("leagueId")],
            Action::Delete => &[Permission::Admin],
        }
    }

    fn to_dto(model: &league::Model) -> LeagueDto {
        LeagueDto {
            id: model.id,
            name: model.name.clone(),
            description: model.description.clone(),
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }

    fn validate_create(input: &CreateLeagueDto) -> Result<(), AppError> {
        require_text("name", &input.name, MAX_NAME_LENGTH)?;
        optional(input.description.as_ref(), |description| {
            require_max_length("description", description, MAX_DESCRIPTION_LENGTH)
        })
    }

    fn create_model(input: CreateLeagueDto) -> league::ActiveModel {
        league::ActiveModel {
            name: ActiveValue::Set(input.name),
            description: ActiveValue::Set(input.description),
            ..Default::default()
        }
    }

    fn validate_update(input: &UpdateLeagueDto) -> Result<(), AppError> {
        optional(input.name.as_ref(), |name| {
            require_text("name", name, MAX_NAME_LENGTH)
        })?;
        optional(input.description.as_ref().and_then(Option::as_ref), |description| {
            require_max_length("description", description, MAX_DESCRIPTION_LENGTH)
        })
    }

    fn update_model(input: UpdateLeagueDto) -> league::ActiveModel {
        let mut active = league::ActiveModel::default();
        if let Some(name) = input.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = input.description {
            active.description = ActiveValue::Set(description);
        }
        active
    }

    async fn load_relation(
        db: &DatabaseConnection,
        model: &league::Model,
        relation: &str,
    ) -> Result<serde_json::Value, AppError> {
        match relation {
            "seasons" => {
                related_many::<SeasonResource>(db, season::Column::LeagueId.eq(model.id)).await
            }
            "teams" => related_many::<TeamResource>(db, team::Column::LeagueId.eq(model.id)).await,
            "members" => {
                related_many::<LeagueUserResource>(db, league_user::Column::LeagueId.eq(model.id))
                    .await
            }
            _ => unknown_relation::<Self>(relation),
        }
    }

    async fn blocking_dependents(
        db: &DatabaseConnection,
        model: &league::Model,
    ) -> Result<Vec<&'static str>, AppError> {
        let mut blocking = Vec::new();
        if has_active::<SeasonResource>(db, season::Column::LeagueId.eq(model.id)).await? {
            blocking.push("seasons");
        }
        if has_active::<TeamResource>(db, team::Column::LeagueId.eq(model.id)).await? {
            blocking.push("teams");
        }
        Ok(blocking)
    }

    /// Makes the creator the first moderator of the new league.
    async fn after_create(
        db: &DatabaseConnection,
        model: &league::Model,
        actor: Option<&SessionContext>,
    ) -> Result<(), AppError> {
        let Some(actor) = actor else {
            return Ok(());
        };

        let membership = league_user::ActiveModel {
            league_id: ActiveValue::Set(model.id),
            user_id: ActiveValue::Set(actor.user_id),
            is_moderator: ActiveValue::Set(true),
            ..Default::default()
        };
        ResourceRepository::<LeagueUserResource>::new(db)
            .create(membership)
            .await?;

        tracing::debug!(
            "User {} is now moderator of league {}",
            actor.user_id,
            model.id
        );

        Ok(())
    }

    /// Memberships of a deleted league are deactivated with it.
    async fn after_delete(db: &DatabaseConnection, model: &league::Model) -> Result<(), AppError> {
        let removed = LeagueUserRepository::new(db)
            .deactivate_where(league_user::Column::LeagueId.eq(model.id))
            .await?;

        tracing::debug!("Deactivated {} memberships of league {}", removed, model.id);

        Ok(())
    }
}
