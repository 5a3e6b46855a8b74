use async_trait::async_trait;
use entity::league_match;
use sea_orm::{ActiveValue, DatabaseConnection};

use crate::{
    data::resource::related_one,
    error::AppError,
    middleware::auth::Permission,
    model::league_match::{CreateMatchDto, MatchDto, UpdateMatchDto},
    resource::{
        column_value, require_active, unknown_relation, Action, Field, FieldKind,
        LeagueResource, Resource, RouteKind, SeasonResource, TeamResource,
    },
};

/// Scheduled or played match between two teams of the same season.
pub struct MatchResource;

#[async_trait]
impl Resource for MatchResource {
    type Entity = league_match::Entity;
    type Model = league_match::Model;
    type ActiveModel = league_match::ActiveModel;
    type Create = CreateMatchDto;
    type Update = UpdateMatchDto;
    type Dto = MatchDto;

    const NAME: &'static str = "match";
    const PATH: &'static str = "match";

    const SCOPE: Option<league_match::Column> = Some(league_match::Column::LeagueId);

    const FILTERS: &'static [Field<league_match::Column>] = &[
        Field {
            name: "leagueId",
            column: league_match::Column::LeagueId,
            kind: FieldKind::Int,
        },
        Field {
            name: "seasonId",
            column: league_match::Column::SeasonId,
            kind: FieldKind::Int,
        },
        Field {
            name: "homeTeamId",
            column: league_match::Column::HomeTeamId,
            kind: FieldKind::Int,
        },
        Field {
            name: "awayTeamId",
            column: league_match::Column::AwayTeamId,
            kind: FieldKind::Int,
        },
    ];

    const FULL_RELATIONS: &'static [&'static str] = &["league", "season", "homeTeam", "awayTeam"];

    fn permissions(action: Action, route: RouteKind) -> &'static [Permission] {
        match (route, action) {
            (_, Action::List | Action::Read) => &[],
            (RouteKind::TopLevel, Action::Create) => &[Permission::Admin],
            _ => &[Permission::LeagueModerator("leagueId")],
        }
    }

    fn to_dto(model: &league_match::Model) -> MatchDto {
        MatchDto {
            id: model.id,
            league_id: model.league_id,
            season_id: model.season_id,
            home_team_id: model.home_team_id,
            away_team_id: model.away_team_id,
            home_score: model.home_score,
            away_score: model.away_score,
            played_at: model.played_at,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }

    fn validate_create(input: &CreateMatchDto) -> Result<(), AppError> {
        if input.home_team_id == input.away_team_id {
            return Err(AppError::Validation(
                "homeTeamId and awayTeamId must differ".to_string(),
            ));
        }
        validate_scores(input.home_score, input.away_score)
    }

    fn create_model(input: CreateMatchDto) -> league_match::ActiveModel {
        let mut active = league_match::ActiveModel {
            season_id: ActiveValue::Set(input.season_id),
            home_team_id: ActiveValue::Set(input.home_team_id),
            away_team_id: ActiveValue::Set(input.away_team_id),
            home_score: ActiveValue::Set(input.home_score),
            away_score: ActiveValue::Set(input.away_score),
            played_at: ActiveValue::Set(input.played_at),
            ..Default::default()
        };
        if let Some(league_id) = input.league_id {
            active.league_id = ActiveValue::Set(league_id);
        }
        active
    }

    fn validate_update(input: &UpdateMatchDto) -> Result<(), AppError> {
        validate_scores(input.home_score.flatten(), input.away_score.flatten())
    }

    fn update_model(input: UpdateMatchDto) -> league_match::ActiveModel {
        let mut active = league_match::ActiveModel::default();
        if let Some(home_score) = input.home_score {
            active.home_score = ActiveValue::Set(home_score);
        }
        if let Some(away_score) = input.away_score {
            active.away_score = ActiveValue::Set(away_score);
        }
        if let Some(played_at) = input.played_at {
            active.played_at = ActiveValue::Set(played_at);
        }
        active
    }

    async fn load_relation(
        db: &DatabaseConnection,
        model: &league_match::Model,
        relation: &str,
    ) -> Result<serde_json::Value, AppError> {
        match relation {
            "league" => related_one::<LeagueResource>(db, Some(model.league_id)).await,
            "season" => related_one::<SeasonResource>(db, Some(model.season_id)).await,
            "homeTeam" => related_one::<TeamResource>(db, Some(model.home_team_id)).await,
            "awayTeam" => related_one::<TeamResource>(db, Some(model.away_team_id)).await,
            _ => unknown_relation::<Self>(relation),
        }
    }

    async fn check_integrity(
        db: &DatabaseConnection,
        active: &league_match::ActiveModel,
    ) -> Result<(), AppError> {
        let league_id = column_value(Self::NAME, "league_id", &active.league_id)?;
        let season_id = column_value(Self::NAME, "season_id", &active.season_id)?;
        let home_team_id = column_value(Self::NAME, "home_team_id", &active.home_team_id)?;
        let away_team_id = column_value(Self::NAME, "away_team_id", &active.away_team_id)?;

        require_active::<LeagueResource>(db, league_id, "leagueId").await?;

        let season = require_active::<SeasonResource>(db, season_id, "seasonId").await?;
        if season.league_id != league_id {
            return Err(AppError::Validation(
                "seasonId must reference a season of the same league".to_string(),
            ));
        }

        for (field, team_id) in [("homeTeamId", home_team_id), ("awayTeamId", away_team_id)] {
            let team = require_active::<TeamResource>(db, team_id, field).await?;
            if team.season_id != season_id {
                return Err(AppError::Validation(format!(
                    "{} must reference a team of season {}",
                    field, season_id
                )));
            }
        }

        Ok(())
    }
}

fn validate_scores(home: Option<i32>, away: Option<i32>) -> Result<(), AppError> {
    for (field, score) in [("homeScore", home), ("awayScore", away)] {
        if score.is_some_and(|score| score < 0) {
            return Err(AppError::Validation(format!(
                "{} must not be negative",
                field
            )));
        }
    }
    Ok(())
}
