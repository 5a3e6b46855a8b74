use async_trait::async_trait;
use entity::{league_match, team};
use sea_orm::{ActiveValue, ColumnTrait, Condition, DatabaseConnection};

use crate::{
    data::resource::{has_active, related_many, related_one},
    error::AppError,
    middleware::auth::Permission,
    model::team::{CreateTeamDto, TeamDto, UpdateTeamDto},
    resource::{
        column_value, require_active, unknown_relation, Action, Field, FieldKind,
        LeagueResource, MatchResource, Resource, RouteKind, SeasonResource, UniqueKey,
        UserResource,
    },
    util::validate::{optional, require_text, MAX_NAME_LENGTH},
};

pub struct TeamResource;

#[async_trait]
impl Resource for TeamResource {
    type Entity = team::Entity;
    type Model = team::Model;
    type ActiveModel = team::ActiveModel;
    type Create = CreateTeamDto;
    type Update = UpdateTeamDto;
    type Dto = TeamDto;

    const NAME: &'static str = "team";
    const PATH: &'static str = "team";

    const SCOPE: Option<team::Column> = Some(team::Column::LeagueId);

    const FILTERS: &'static [Field<team::Column>] = &[
        Field {
            name: "leagueId",
            column: team::Column::LeagueId,
            kind: FieldKind::Int,
        },
        Field {
            name: "seasonId",
            column: team::Column::SeasonId,
            kind: FieldKind::Int,
        },
        Field {
            name: "coachId",
            column: team::Column::CoachId,
            kind: FieldKind::Int,
        },
        Field {
            name: "name",
            column: team::Column::Name,
            kind: FieldKind::Text,
        },
    ];

    const UNIQUE: &'static [UniqueKey<team::Column>] = &[UniqueKey {
        label: "name",
        columns: &[team::Column::SeasonId, team::Column::Name],
    }];

    const FULL_RELATIONS: &'static [&'static str] =
        &["league", "season", "coach", "homeMatches", "awayMatches"];

    /// Members enter their own teams; renaming needs both membership and being the coach.
    fn permissions(action: Action, route: RouteKind) -> &'static [Permission] {
        match (route, action) {
            (_, Action::List | Action::Read) => &[],
            (RouteKind::TopLevel, Action::Create) => &[Permission::Admin],
            (RouteKind::Nested, Action::Create) => &[Permission::LeagueMember("leagueId")],
            (_, Action::Update) => &[
                Permission::LeagueMember("leagueId"),
                Permission::ResourceOwner("coachId"),
            ],
            (_, Action::Delete) => &[Permission::LeagueModerator("leagueId")],
        }
    }

    fn to_dto(model: &team::Model) -> TeamDto {
        TeamDto {
            id: model.id,
            league_id: model.league_id,
            season_id: model.season_id,
            coach_id: model.coach_id,
            name: model.name.clone(),
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }

    fn validate_create(input: &CreateTeamDto) -> Result<(), AppError> {
        require_text("name", &input.name, MAX_NAME_LENGTH)
    }

    fn create_model(input: CreateTeamDto) -> team::ActiveModel {
        let mut active = team::ActiveModel {
            season_id: ActiveValue::Set(input.season_id),
            coach_id: ActiveValue::Set(input.coach_id),
            name: ActiveValue::Set(input.name),
            ..Default::default()
        };
        if let Some(league_id) = input.league_id {
            active.league_id = ActiveValue::Set(league_id);
        }
        active
    }

    fn validate_update(input: &UpdateTeamDto) -> Result<(), AppError> {
        optional(input.name.as_ref(), |name| {
            require_text("name", name, MAX_NAME_LENGTH)
        })
    }

    fn update_model(input: UpdateTeamDto) -> team::ActiveModel {
        let mut active = team::ActiveModel::default();
        if let Some(name) = input.name {
            active.name = ActiveValue::Set(name);
        }
        active
    }

    async fn load_relation(
        db: &DatabaseConnection,
        model: &team::Model,
        relation: &str,
    ) -> Result<serde_json::Value, AppError> {
        match relation {
            "league" => related_one::<LeagueResource>(db, Some(model.league_id)).await,
            "season" => related_one::<SeasonResource>(db, Some(model.season_id)).await,
            "coach" => related_one::<UserResource>(db, Some(model.coach_id)).await,
            "homeMatches" => {
                related_many::<MatchResource>(db, league_match::Column::HomeTeamId.eq(model.id))
                    .await
            }
            "awayMatches" => {
                related_many::<MatchResource>(db, league_match::Column::AwayTeamId.eq(model.id))
                    .await
            }
            _ => unknown_relation::<Self>(relation),
        }
    }

    async fn check_integrity(
        db: &DatabaseConnection,
        active: &team::ActiveModel,
    ) -> Result<(), AppError> {
        let league_id = column_value(Self::NAME, "league_id", &active.league_id)?;
        let season_id = column_value(Self::NAME, "season_id", &active.season_id)?;
        let coach_id = column_value(Self::NAME, "coach_id", &active.coach_id)?;

        require_active::<LeagueResource>(db, league_id, "leagueId").await?;

        let season = require_active::<SeasonResource>(db, season_id, "seasonId").await?;
        if season.league_id != league_id {
            return Err(AppError::Validation(
                "seasonId must reference a season of the same league".to_string(),
            ));
        }

        require_active::<UserResource>(db, coach_id, "coachId").await?;

        Ok(())
    }

    async fn blocking_dependents(
        db: &DatabaseConnection,
        model: &team::Model,
    ) -> Result<Vec<&'static str>, AppError> {
        let plays_in = Condition::any()
            .add(league_match::Column::HomeTeamId.eq(model.id))
            .add(league_match::Column::AwayTeamId.eq(model.id));

        let mut blocking = Vec::new();
        if has_active::<MatchResource>(db, plays_in).await? {
            blocking.push("matches");
        }
        Ok(blocking)
    }
}
