use async_trait::async_trait;
use entity::{pokemon, pokemon_move, pokemon_type, type_effectiveness};
use sea_orm::{ActiveValue, ColumnTrait, Condition, DatabaseConnection};

use crate::{
    data::resource::{has_active, related_many},
    error::AppError,
    middleware::auth::Permission,
    model::pokemon_type::{CreatePokemonTypeDto, PokemonTypeDto, UpdatePokemonTypeDto},
    resource::{
        unknown_relation, Action, Field, FieldKind, MoveResource, PokemonResource, Resource,
        RouteKind, TypeEffectivenessResource, UniqueKey,
    },
    util::validate::{optional, require_hex_color, require_text, MAX_NAME_LENGTH},
};

pub struct PokemonTypeResource;

#[async_trait]
impl Resource for PokemonTypeResource {
    type Entity = pokemon_type::Entity;
    type Model = pokemon_type::Model;
    type ActiveModel = pokemon_type::ActiveModel;
    type Create = CreatePokemonTypeDto;
    type Update = UpdatePokemonTypeDto;
    type Dto = PokemonTypeDto;

    const NAME: &'static str = "pokemon type";
    const PATH: &'static str = "pokemon-type";

    const FILTERS: &'static [Field<pokemon_type::Column>] = &[Field {
        name: "name",
        column: pokemon_type::Column::Name,
        kind: FieldKind::Text,
    }];

    const UNIQUE: &'static [UniqueKey<pokemon_type::Column>] = &[UniqueKey {
        label: "name",
        columns: &[pokemon_type::Column::Name],
    }];

    const FULL_RELATIONS: &'static [&'static str] = &["moves", "typeEffectiveness", "pokemon"];

    fn permissions(action: Action, _route: RouteKind) -> &'static [Permission] {
        match action {
            Action::List | Action::Read => &[],
            Action::Create | Action::Update | Action::Delete => &[Permission::Admin],
        }
    }

    fn to_dto(model: &pokemon_type::Model) -> PokemonTypeDto {
        PokemonTypeDto {
            id: model.id,
            name: model.name.clone(),
            color: model.color.clone(),
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }

    fn validate_create(input: &CreatePokemonTypeDto) -> Result<(), AppError> {
        require_text("name", &input.name, MAX_NAME_LENGTH)?;
        optional(input.color.as_ref(), |color| require_hex_color("color", color))
    }

    fn create_model(input: CreatePokemonTypeDto) -> pokemon_type::ActiveModel {
        pokemon_type::ActiveModel {
            name: ActiveValue::Set(input.name),
            color: ActiveValue::Set(input.color),
            ..Default::default()
        }
    }

    fn validate_update(input: &UpdatePokemonTypeDto) -> Result<(), AppError> {
        optional(input.name.as_ref(), |name| {
            require_text("name", name, MAX_NAME_LENGTH)
        })?;
        optional(input.color.as_ref().and_then(Option::as_ref), |color| {
            require_hex_color("color", color)
        })
    }

    fn update_model(input: UpdatePokemonTypeDto) -> pokemon_type::ActiveModel {
        let mut active = pokemon_type::ActiveModel::default();
        if let Some(name) = input.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(color) = input.color {
            active.color = ActiveValue::Set(color);
        }
        active
    }

    async fn load_relation(
        db: &DatabaseConnection,
        model: &pokemon_type::Model,
        relation: &str,
    ) -> Result<serde_json::Value, AppError> {
        match relation {
            "moves" => {
                related_many::<MoveResource>(db, pokemon_move::Column::TypeId.eq(model.id)).await
            }
            "typeEffectiveness" => {
                related_many::<TypeEffectivenessResource>(db, effectiveness_of(model.id)).await
            }
            "pokemon" => related_many::<PokemonResource>(db, pokemon_of(model.id)).await,
            _ => unknown_relation::<Self>(relation),
        }
    }

    async fn blocking_dependents(
        db: &DatabaseConnection,
        model: &pokemon_type::Model,
    ) -> Result<Vec<&'static str>, AppError> {
        let mut blocking = Vec::new();
        if has_active::<MoveResource>(db, pokemon_move::Column::TypeId.eq(model.id)).await? {
            blocking.push("moves");
        }
        if has_active::<TypeEffectivenessResource>(db, effectiveness_of(model.id)).await? {
            blocking.push("type effectiveness entries");
        }
        if has_active::<PokemonResource>(db, pokemon_of(model.id)).await? {
            blocking.push("pokemon");
        }
        Ok(blocking)
    }
}

/// Effectiveness entries where the type attacks or defends.
fn effectiveness_of(type_id: i32) -> Condition {
    Condition::any()
        .add(type_effectiveness::Column::AttackingTypeId.eq(type_id))
        .add(type_effectiveness::Column::DefendingTypeId.eq(type_id))
}

fn pokemon_of(type_id: i32) -> Condition {
    Condition::any()
        .add(pokemon::Column::PrimaryTypeId.eq(type_id))
        .add(pokemon::Column::SecondaryTypeId.eq(type_id))
}
