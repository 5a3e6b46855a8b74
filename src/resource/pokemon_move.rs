use async_trait::async_trait;
use entity::pokemon_move;
use sea_orm::{ActiveValue, DatabaseConnection};

use crate::{
    data::resource::related_one,
    error::AppError,
    middleware::auth::Permission,
    model::pokemon_move::{CreateMoveDto, MoveDto, UpdateMoveDto},
    resource::{
        column_value, require_active, unknown_relation, Action, Field, FieldKind,
        PokemonTypeResource, Resource, RouteKind, UniqueKey,
    },
    util::validate::{optional, require_one_of, require_range, require_text, MAX_NAME_LENGTH},
};

pub const MOVE_CATEGORIES: &[&str] = &["physical", "special", "status"];

pub struct MoveResource;

#[async_trait]
impl Resource for MoveResource {
    type Entity = pokemon_move::Entity;
    type Model = pokemon_move::Model;
    type ActiveModel = pokemon_move::ActiveModel;
    type Create = CreateMoveDto;
    type Update = UpdateMoveDto;
    type Dto = MoveDto;

    const NAME: &'static str = "move";
    const PATH: &'static str = "move";

    const FILTERS: &'static [Field<pokemon_move::Column>] = &[
        Field {
            name: "name",
            column: pokemon_move::Column::Name,
            kind: FieldKind::Text,
        },
        Field {
            name: "typeId",
            column: pokemon_move::Column::TypeId,
            kind: FieldKind::Int,
        },
        Field {
            name: "category",
            column: pokemon_move::Column::Category,
            kind: FieldKind::Text,
        },
        Field {
            name: "power",
            column: pokemon_move::Column::Power,
            kind: FieldKind::Int,
        },
        Field {
            name: "pp",
            column: pokemon_move::Column::Pp,
            kind: FieldKind::Int,
        },
    ];

    const UNIQUE: &'static [UniqueKey<pokemon_move::Column>] = &[UniqueKey {
        label: "name",
        columns: &[pokemon_move::Column::Name],
    }];

    const FULL_RELATIONS: &'static [&'static str] = &["type"];

    fn permissions(action: Action, _route: RouteKind) -> &'static [Permission] {
        match action {
            Action::List | Action::Read => &[],
            Action::Create | Action::Update | Action::Delete => &[Permission::Admin],
        }
    }

    fn to_dto(model: &pokemon_move::Model) -> MoveDto {
        MoveDto {
            id: model.id,
            name: model.name.clone(),
            type_id: model.type_id,
            category: model.category.clone(),
            power: model.power,
            accuracy: model.accuracy,
            pp: model.pp,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }

    fn validate_create(input: &CreateMoveDto) -> Result<(), AppError> {
        require_text("name", &input.name, MAX_NAME_LENGTH)?;
        require_one_of("category", &input.category, MOVE_CATEGORIES)?;
        validate_numbers(input.power, input.accuracy, Some(input.pp))
    }

    fn create_model(input: CreateMoveDto) -> pokemon_move::ActiveModel {
        pokemon_move::ActiveModel {
            name: ActiveValue::Set(input.name),
            type_id: ActiveValue::Set(input.type_id),
            category: ActiveValue::Set(input.category),
            power: ActiveValue::Set(input.power),
            accuracy: ActiveValue::Set(input.accuracy),
            pp: ActiveValue::Set(input.pp),
            ..Default::default()
        }
    }

    fn validate_update(input: &UpdateMoveDto) -> Result<(), AppError> {
        optional(input.name.as_ref(), |name| {
            require_text("name", name, MAX_NAME_LENGTH)
        })?;
        optional(input.category.as_ref(), |category| {
            require_one_of("category", category, MOVE_CATEGORIES)
        })?;
        validate_numbers(input.power.flatten(), input.accuracy.flatten(), input.pp)
    }

    fn update_model(input: UpdateMoveDto) -> pokemon_move::ActiveModel {
        let mut active = pokemon_move::ActiveModel::default();
        if let Some(name) = input.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(type_id) = input.type_id {
            active.type_id = ActiveValue::Set(type_id);
        }
        if let Some(category) = input.category {
            active.category = ActiveValue::Set(category);
        }
        if let Some(power) = input.power {
            active.power = ActiveValue::Set(power);
        }
        if let Some(accuracy) = input.accuracy {
            active.accuracy = ActiveValue::Set(accuracy);
        }
        if let Some(pp) = input.pp {
            active.pp = ActiveValue::Set(pp);
        }
        active
    }

    async fn load_relation(
        db: &DatabaseConnection,
        model: &pokemon_move::Model,
        relation: &str,
    ) -> Result<serde_json::Value, AppError> {
        match relation {
            "type" => related_one::<PokemonTypeResource>(db, Some(model.type_id)).await,
            _ => unknown_relation::<Self>(relation),
        }
    }

    async fn check_integrity(
        db: &DatabaseConnection,
        active: &pokemon_move::ActiveModel,
    ) -> Result<(), AppError> {
        let type_id = column_value(Self::NAME, "type_id", &active.type_id)?;
        require_active::<PokemonTypeResource>(db, type_id, "typeId").await?;

        Ok(())
    }
}

fn validate_numbers(
    power: Option<i32>,
    accuracy: Option<i32>,
    pp: Option<i32>,
) -> Result<(), AppError> {
    optional(power.as_ref(), |&power| require_range("power", power, 0, 250))?;
    optional(accuracy.as_ref(), |&accuracy| {
        require_range("accuracy", accuracy, 1, 100)
    })?;
    optional(pp.as_ref(), |&pp| require_range("pp", pp, 1, 64))
}
