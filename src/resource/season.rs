use async_trait::async_trait;
use entity::{league_match, season, team};
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection};

use crate::{
    data::resource::{has_active, related_many, related_one},
    error::AppError,
    middleware::auth::Permission,
    model::season::{CreateSeasonDto, SeasonDto, UpdateSeasonDto},
    resource::{
        column_value, require_active, unknown_relation, Action, Field, FieldKind,
        LeagueResource, MatchResource, Resource, RouteKind, TeamResource, UniqueKey,
    },
    util::validate::{optional, require_text, MAX_NAME_LENGTH},
};

pub struct SeasonResource;

#[async_trait]
impl Resource for SeasonResource {
    type Entity = season::Entity;
    type Model = season::Model;
    type ActiveModel = season::ActiveModel;
    type Create = CreateSeasonDto;
    type Update = UpdateSeasonDto;
    type Dto = SeasonDto;

    const NAME: &'static str = "season";
    const PATH: &'static str = "season";

    const SCOPE: Option<season::Column> = Some(season::Column::LeagueId);

    const FILTERS: &'static [Field<season::Column>] = &[
        Field {
            name: "leagueId",
            column: season::Column::LeagueId,
            kind: FieldKind::Int,
        },
        Field {
            name: "name",
            column: season::Column::Name,
            kind: FieldKind::Text,
        },
    ];

    const UNIQUE: &'static [UniqueKey<season::Column>] = &[UniqueKey {
        label: "name",
        columns: &[season::Column::LeagueId, season::Column::Name],
    }];

    const FULL_RELATIONS: &'static [&'static str] = &["league", "teams", "matches"];

    fn permissions(action: Action, route: RouteKind) -> &'static [Permission] {
        match (route, action) {
            (_, Action::List | Action::Read) => &[],
            (RouteKind::TopLevel, Action::Create) => &[Permission::Admin],
            _ => &[Permission::LeagueModerator("leagueId")],
        }
    }

    fn to_dto(model: &season::Model) -> SeasonDto {
        SeasonDto {
            id: model.id,
            league_id: model.league_id,
            name: model.name.clone(),
            starts_at: model.starts_at,
            ends_at: model.ends_at,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }

    fn validate_create(input: &CreateSeasonDto) -> Result<(), AppError> {
        require_text("name", &input.name, MAX_NAME_LENGTH)
    }

    fn create_model(input: CreateSeasonDto) -> season::ActiveModel {
        let mut active = season::ActiveModel {
            name: ActiveValue::Set(input.name),
            starts_at: ActiveValue::Set(input.starts_at),
            ends_at: ActiveValue::Set(input.ends_at),
            ..Default::default()
        };
        if let Some(league_id) = input.league_id {
            active.league_id = ActiveValue::Set(league_id);
        }
        active
    }

    fn validate_update(input: &UpdateSeasonDto) -> Result<(), AppError> {
        optional(input.name.as_ref(), |name| {
            require_text("name", name, MAX_NAME_LENGTH)
        })
    }

    fn update_model(input: UpdateSeasonDto) -> season::ActiveModel {
        let mut active = season::ActiveModel::default();
        if let Some(name) = input.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(starts_at) = input.starts_at {
            active.starts_at = ActiveValue::Set(starts_at);
        }
        if let Some(ends_at) = input.ends_at {
            active.ends_at = ActiveValue::Set(ends_at);
        }
        active
    }

    async fn load_relation(
        db: &DatabaseConnection,
        model: &season::Model,
        relation: &str,
    ) -> Result<serde_json::Value, AppError> {
        match relation {
            "league" => related_one::<LeagueResource>(db, Some(model.league_id)).await,
            "teams" => related_many::<TeamResource>(db, team::Column::SeasonId.eq(model.id)).await,
            "matches" => {
                related_many::<MatchResource>(db, league_match::Column::SeasonId.eq(model.id))
                    .await
            }
            _ => unknown_relation::<Self>(relation),
        }
    }

    async fn check_integrity(
        db: &DatabaseConnection,
        active: &season::ActiveModel,
    ) -> Result<(), AppError> {
        let league_id = column_value(Self::NAME, "league_id", &active.league_id)?;
        require_active::<LeagueResource>(db, league_id, "leagueId").await?;

        let starts_at = column_value(Self::NAME, "starts_at", &active.starts_at)?;
        let ends_at = column_value(Self::NAME, "ends_at", &active.ends_at)?;
        if let (Some(starts_at), Some(ends_at)) = (starts_at, ends_at) {
            if starts_at > ends_at {
                return Err(AppError::Validation(
                    "startsAt must not be after endsAt".to_string(),
                ));
            }
        }

        Ok(())
    }

    async fn blocking_dependents(
        db: &DatabaseConnection,
        model: &season::Model,
    ) -> Result<Vec<&'static str>, AppError> {
        let mut blocking = Vec::new();
        if has_active::<TeamResource>(db, team::Column::SeasonId.eq(model.id)).await? {
            blocking.push("teams");
        }
        if has_active::<MatchResource>(db, league_match::Column::SeasonId.eq(model.id)).await? {
            blocking.push("matches");
        }
        Ok(blocking)
    }
}
