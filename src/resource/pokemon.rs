use async_trait::async_trait;
use entity::pokemon;
use sea_orm::{ActiveValue, DatabaseConnection};

use crate::{
    data::resource::related_one,
    error::AppError,
    middleware::auth::Permission,
    model::pokemon::{CreatePokemonDto, PokemonDto, UpdatePokemonDto},
    resource::{
        column_value, require_active, unknown_relation, Action, Field, FieldKind,
        PokemonTypeResource, Resource, RouteKind, UniqueKey,
    },
    util::validate::{optional, require_range, require_text, MAX_NAME_LENGTH},
};

pub const MIN_STAT: i32 = 1;
pub const MAX_STAT: i32 = 255;

pub struct PokemonResource;

#[async_trait]
impl Resource for PokemonResource {
    type Entity = pokemon::Entity;
    type Model = pokemon::Model;
    type ActiveModel = pokemon::ActiveModel;
    type Create = CreatePokemonDto;
    type Update = UpdatePokemonDto;
    type Dto = PokemonDto;

    const NAME: &'static str = "pokemon";
    const PATH: &'static str = "pokemon";

    const FILTERS: &'static [Field<pokemon::Column>] = &[
        Field {
            name: "dexId",
            column: pokemon::Column::DexId,
            kind: FieldKind::Int,
        },
        Field {
            name: "name",
            column: pokemon::Column::Name,
            kind: FieldKind::Text,
        },
        Field {
            name: "primaryTypeId",
            column: pokemon::Column::PrimaryTypeId,
            kind: FieldKind::Int,
        },
        Field {
            name: "secondaryTypeId",
            column: pokemon::Column::SecondaryTypeId,
            kind: FieldKind::Int,
        },
        Field {
            name: "speed",
            column: pokemon::Column::Speed,
            kind: FieldKind::Int,
        },
    ];

    const UNIQUE: &'static [UniqueKey<pokemon::Column>] = &[
        UniqueKey {
            label: "dexId",
            columns: &[pokemon::Column::DexId],
        },
        UniqueKey {
            label: "name",
            columns: &[pokemon::Column::Name],
        },
    ];

    const FULL_RELATIONS: &'static [&'static str] = &["primaryType", "secondaryType"];

    fn permissions(action: Action, _route: RouteKind) -> &'static [Permission] {
        match action {
            Action::List | Action::Read => &[],
            Action::Create | Action::Update | Action::Delete => &[Permission::Admin],
        }
    }

    fn to_dto(model: &pokemon::Model) -> PokemonDto {
        PokemonDto {
            id: model.id,
            dex_id: model.dex_id,
            name: model.name.clone(),
            hp: model.hp,
            attack: model.attack,
            defense: model.defense,
            special_attack: model.special_attack,
            special_defense: model.special_defense,
            speed: model.speed,
            primary_type_id: model.primary_type_id,
            secondary_type_id: model.secondary_type_id,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }

    fn validate_create(input: &CreatePokemonDto) -> Result<(), AppError> {
        require_text("name", &input.name, MAX_NAME_LENGTH)?;
        require_dex_id(input.dex_id)?;
        for (field, value) in [
            ("hp", input.hp),
            ("attack", input.attack),
            ("defense", input.defense),
            ("specialAttack", input.special_attack),
            ("specialDefense", input.special_defense),
            ("speed", input.speed),
        ] {
            require_range(field, value, MIN_STAT, MAX_STAT)?;
        }
        Ok(())
    }

    fn create_model(input: CreatePokemonDto) -> pokemon::ActiveModel {
        pokemon::ActiveModel {
            dex_id: ActiveValue::Set(input.dex_id),
            name: ActiveValue::Set(input.name),
            hp: ActiveValue::Set(input.hp),
            attack: ActiveValue::Set(input.attack),
            defense: ActiveValue::Set(input.defense),
            special_attack: ActiveValue::Set(input.special_attack),
            special_defense: ActiveValue::Set(input.special_defense),
            speed: ActiveValue::Set(input.speed),
            primary_type_id: ActiveValue::Set(input.primary_type_id),
            secondary_type_id: ActiveValue::Set(input.secondary_type_id),
            ..Default::default()
        }
    }

    fn validate_update(input: &UpdatePokemonDto) -> Result<(), AppError> {
        optional(input.name.as_ref(), |name| {
            require_text("name", name, MAX_NAME_LENGTH)
        })?;
        optional(input.dex_id.as_ref(), |&dex_id| require_dex_id(dex_id))?;
        for (field, value) in [
            ("hp", input.hp),
            ("attack", input.attack),
            ("defense", input.defense),
            ("specialAttack", input.special_attack),
            ("specialDefense", input.special_defense),
            ("speed", input.speed),
        ] {
            optional(value.as_ref(), |&value| {
                require_range(field, value, MIN_STAT, MAX_STAT)
            })?;
        }
        Ok(())
    }

    fn update_model(input: UpdatePokemonDto) -> pokemon::ActiveModel {
        let mut active = pokemon::ActiveModel::default();
        if let Some(dex_id) = input.dex_id {
            active.dex_id = ActiveValue::Set(dex_id);
        }
        if let Some(name) = input.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(hp) = input.hp {
            active.hp = ActiveValue::Set(hp);
        }
        if let Some(attack) = input.attack {
            active.attack = ActiveValue::Set(attack);
        }
        if let Some(defense) = input.defense {
            active.defense = ActiveValue::Set(defense);
        }
        if let Some(special_attack) = input.special_attack {
            active.special_attack = ActiveValue::Set(special_attack);
        }
        if let Some(special_defense) = input.special_defense {
            active.special_defense = ActiveValue::Set(special_defense);
        }
        if let Some(speed) = input.speed {
            active.speed = ActiveValue::Set(speed);
        }
        if let Some(primary_type_id) = input.primary_type_id {
            active.primary_type_id = ActiveValue::Set(primary_type_id);
        }
        if let Some(secondary_type_id) = input.secondary_type_id {
            active.secondary_type_id = ActiveValue::Set(secondary_type_id);
        }
        active
    }

    async fn load_relation(
        db: &DatabaseConnection,
        model: &pokemon::Model,
        relation: &str,
    ) -> Result<serde_json::Value, AppError> {
        match relation {
            "primaryType" => {
                related_one::<PokemonTypeResource>(db, Some(model.primary_type_id)).await
            }
            "secondaryType" => {
                related_one::<PokemonTypeResource>(db, model.secondary_type_id).await
            }
            _ => unknown_relation::<Self>(relation),
        }
    }

    /// Both types must be active, and a secondary type must differ from the primary one.
    async fn check_integrity(
        db: &DatabaseConnection,
        active: &pokemon::ActiveModel,
    ) -> Result<(), AppError> {
        let primary = column_value(Self::NAME, "primary_type_id", &active.primary_type_id)?;
        let secondary = column_value(Self::NAME, "secondary_type_id", &active.secondary_type_id)?;

        require_active::<PokemonTypeResource>(db, primary, "primaryTypeId").await?;

        if let Some(secondary) = secondary {
            if secondary == primary {
                return Err(AppError::Validation(
                    "secondaryTypeId must differ from primaryTypeId".to_string(),
                ));
            }
            require_active::<PokemonTypeResource>(db, secondary, "secondaryTypeId").await?;
        }

        Ok(())
    }
}

fn require_dex_id(dex_id: i32) -> Result<(), AppError> {
    if dex_id < 1 {
        return Err(AppError::Validation(
            "dexId must be at least 1".to_string(),
        ));
    }
    Ok(())
}
