use async_trait::async_trait;
use entity::{league_user, team, user};
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection};

use crate::{
    data::{
        league_user::LeagueUserRepository,
        resource::{has_active, related_many},
    },
    error::AppError,
    middleware::auth::Permission,
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    resource::{
        unknown_relation, Action, Field, FieldKind, LeagueUserResource, Resource, RouteKind,
        TeamResource, UniqueKey,
    },
    util::validate::{optional, require_text, MAX_NAME_LENGTH},
};

pub struct UserResource;

#[async_trait]
impl Resource for UserResource {
    type Entity = user::Entity;
    type Model = user::Model;
    type ActiveModel = user::ActiveModel;
    type Create = CreateUserDto;
    type Update = UpdateUserDto;
    type Dto = UserDto;

    const NAME: &'static str = "user";
    const PATH: &'static str = "user";

    const FILTERS: &'static [Field<user::Column>] = &[
        Field {
            name: "discordId",
            column: user::Column::DiscordId,
            kind: FieldKind::Text,
        },
        Field {
            name: "name",
            column: user::Column::Name,
            kind: FieldKind::Text,
        },
        Field {
            name: "admin",
            column: user::Column::Admin,
            kind: FieldKind::Bool,
        },
    ];

    const UNIQUE: &'static [UniqueKey<user::Column>] = &[UniqueKey {
        label: "discordId",
        columns: &[user::Column::DiscordId],
    }];

    const FULL_RELATIONS: &'static [&'static str] = &["memberships", "teams"];

    fn permissions(action: Action, _route: RouteKind) -> &'static [Permission] {
        match action {
            Action::List | Action::Read => &[Permission::Authenticated],
            Action::Create | Action::Update | Action::Delete => &[Permission::Admin],
        }
    }

    fn to_dto(model: &user::Model) -> UserDto {
        UserDto {
            id: model.id,
            discord_id: model.discord_id.clone(),
            name: model.name.clone(),
            admin: model.admin,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }

    fn validate_create(input: &CreateUserDto) -> Result<(), AppError> {
        require_text("discordId", &input.discord_id, MAX_NAME_LENGTH)?;
        require_text("name", &input.name, MAX_NAME_LENGTH)
    }

    fn create_model(input: CreateUserDto) -> user::ActiveModel {
        user::ActiveModel {
            discord_id: ActiveValue::Set(input.discord_id),
            name: ActiveValue::Set(input.name),
            admin: ActiveValue::Set(input.admin),
            ..Default::default()
        }
    }

    fn validate_update(input: &UpdateUserDto) -> Result<(), AppError> {
        optional(input.name.as_ref(), |name| {
            require_text("name", name, MAX_NAME_LENGTH)
        })
    }

    fn update_model(input: UpdateUserDto) -> user::ActiveModel {
        let mut active = user::ActiveModel::default();
        if let Some(name) = input.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(admin) = input.admin {
            active.admin = ActiveValue::Set(admin);
        }
        active
    }

    async fn load_relation(
        db: &DatabaseConnection,
        model: &user::Model,
        relation: &str,
    ) -> Result<serde_json::Value, AppError> {
        match relation {
            "memberships" => {
                related_many::<LeagueUserResource>(db, league_user::Column::UserId.eq(model.id))
                    .await
            }
            "teams" => related_many::<TeamResource>(db, team::Column::CoachId.eq(model.id)).await,
            _ => unknown_relation::<Self>(relation),
        }
    }

    async fn blocking_dependents(
        db: &DatabaseConnection,
        model: &user::Model,
    ) -> Result<Vec<&'static str>, AppError> {
        let mut blocking = Vec::new();
        if has_active::<TeamResource>(db, team::Column::CoachId.eq(model.id)).await? {
            blocking.push("teams");
        }
        Ok(blocking)
    }

    /// Memberships of a deleted user are deactivated with it.
    async fn after_delete(db: &DatabaseConnection, model: &user::Model) -> Result<(), AppError> {
        let removed = LeagueUserRepository::new(db)
            .deactivate_where(league_user::Column::UserId.eq(model.id))
            .await?;

        tracing::debug!("Deactivated {} memberships of user {}", removed, model.id);

        Ok(())
    }
}
