use async_trait::async_trait;
use entity::league_user;
use sea_orm::{ActiveValue, DatabaseConnection};

use crate::{
    data::resource::related_one,
    error::AppError,
    middleware::auth::Permission,
    model::league_user::{CreateLeagueUserDto, LeagueUserDto, UpdateLeagueUserDto},
    resource::{
        column_value, require_active, unknown_relation, Action, Field, FieldKind,
        LeagueResource, Resource, RouteKind, UniqueKey, UserResource,
    },
};

/// Membership of a user in a league.
pub struct LeagueUserResource;

#[async_trait]
impl Resource for LeagueUserResource {
    type Entity = league_user::Entity;
    type Model = league_user::Model;
    type ActiveModel = league_user::ActiveModel;
    type Create = CreateLeagueUserDto;
    type Update = UpdateLeagueUserDto;
    type Dto = LeagueUserDto;

    const NAME: &'static str = "league user";
    const PATH: &'static str = "league-user";

    const SCOPE: Option<league_user::Column> = Some(league_user::Column::LeagueId);

    const FILTERS: &'static [Field<league_user::Column>] = &[
        Field {
            name: "leagueId",
            column: league_user::Column::LeagueId,
            kind: FieldKind::Int,
        },
        Field {
            name: "userId",
            column: league_user::Column::UserId,
            kind: FieldKind::Int,
        },
        Field {
            name: "isModerator",
            column: league_user::Column::IsModerator,
            kind: FieldKind::Bool,
        },
    ];

    const UNIQUE: &'static [UniqueKey<league_user::Column>] = &[UniqueKey {
        label: "league and user",
        columns: &[league_user::Column::LeagueId, league_user::Column::UserId],
    }];

    const FULL_RELATIONS: &'static [&'static str] = &["league", "user"];

    fn permissions(action: Action, route: RouteKind) -> &'static [Permission] {
        match (route, action) {
            (RouteKind::TopLevel, Action::List | Action::Read) => &[Permission::Authenticated],
            (RouteKind::TopLevel, _) => &[Permission::Admin],
            (RouteKind::Nested, Action::List | Action::Read) => {
                &[Permission::LeagueMember("leagueId")]
            }
            (RouteKind::Nested, _) => &[Permission::LeagueModerator("leagueId")],
        }
    }

    fn to_dto(model: &league_user::Model) -> LeagueUserDto {
        LeagueUserDto {
            id: model.id,
            league_id: model.league_id,
            user_id: model.user_id,
            is_moderator: model.is_moderator,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }

    fn validate_create(_input: &CreateLeagueUserDto) -> Result<(), AppError> {
        Ok(())
    }

    fn create_model(input: CreateLeagueUserDto) -> league_user::ActiveModel {
        let mut active = league_user::ActiveModel {
            user_id: ActiveValue::Set(input.user_id),
            is_moderator: ActiveValue::Set(input.is_moderator),
            ..Default::default()
        };
        if let Some(league_id) = input.league_id {
            active.league_id = ActiveValue::Set(league_id);
        }
        active
    }

    fn validate_update(_input: &UpdateLeagueUserDto) -> Result<(), AppError> {
        Ok(())
    }

    fn update_model(input: UpdateLeagueUserDto) -> league_user::ActiveModel {
        let mut active = league_user::ActiveModel::default();
        if let Some(is_moderator) = input.is_moderator {
            active.is_moderator = ActiveValue::Set(is_moderator);
        }
        active
    }

    async fn load_relation(
        db: &DatabaseConnection,
        model: &league_user::Model,
        relation: &str,
    ) -> Result<serde_json::Value, AppError> {
        match relation {
            "league" => related_one::<LeagueResource>(db, Some(model.league_id)).await,
            "user" => related_one::<UserResource>(db, Some(model.user_id)).await,
            _ => unknown_relation::<Self>(relation),
        }
    }

    async fn check_integrity(
        db: &DatabaseConnection,
        active: &league_user::ActiveModel,
    ) -> Result<(), AppError> {
        let league_id = column_value(Self::NAME, "league_id", &active.league_id)?;
        let user_id = column_value(Self::NAME, "user_id", &active.user_id)?;

        require_active::<LeagueResource>(db, league_id, "leagueId").await?;
        require_active::<UserResource>(db, user_id, "userId").await?;

        Ok(())
    }
}
