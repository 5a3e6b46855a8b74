use async_trait::async_trait;
use entity::type_effectiveness;
use sea_orm::{ActiveValue, DatabaseConnection};

use crate::{
    data::resource::related_one,
    error::AppError,
    middleware::auth::Permission,
    model::type_effectiveness::{
        CreateTypeEffectivenessDto, TypeEffectivenessDto, UpdateTypeEffectivenessDto,
    },
    resource::{
        column_value, require_active, unknown_relation, Action, Field, FieldKind,
        PokemonTypeResource, Resource, RouteKind, UniqueKey,
    },
};

pub const MAX_MULTIPLIER: f64 = 4.0;

/// Damage multiplier of an attacking type against a defending type.
pub struct TypeEffectivenessResource;

#[async_trait]
impl Resource for TypeEffectivenessResource {
    type Entity = type_effectiveness::Entity;
    type Model = type_effectiveness::Model;
    type ActiveModel = type_effectiveness::ActiveModel;
    type Create = CreateTypeEffectivenessDto;
    type Update = UpdateTypeEffectivenessDto;
    type Dto = TypeEffectivenessDto;

    const NAME: &'static str = "type effectiveness entry";
    const PATH: &'static str = "type-effectiveness";

    const FILTERS: &'static [Field<type_effectiveness::Column>] = &[
        Field {
            name: "attackingTypeId",
            column: type_effectiveness::Column::AttackingTypeId,
            kind: FieldKind::Int,
        },
        Field {
            name: "defendingTypeId",
            column: type_effectiveness::Column::DefendingTypeId,
            kind: FieldKind::Int,
        },
    ];

    const UNIQUE: &'static [UniqueKey<type_effectiveness::Column>] = &[UniqueKey {
        label: "type pairing",
        columns: &[
            type_effectiveness::Column::AttackingTypeId,
            type_effectiveness::Column::DefendingTypeId,
        ],
    }];

    const FULL_RELATIONS: &'static [&'static str] = &["attackingType", "defendingType"];

    fn permissions(action: Action, _route: RouteKind) -> &'static [Permission] {
        match action {
            Action::List | Action::Read => &[],
            Action::Create | Action::Update | Action::Delete => &[Permission::Admin],
        }
    }

    fn to_dto(model: &type_effectiveness::Model) -> TypeEffectivenessDto {
        TypeEffectivenessDto {
            id: model.id,
            attacking_type_id: model.attacking_type_id,
            defending_type_id: model.defending_type_id,
            multiplier: model.multiplier,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }

    fn validate_create(input: &CreateTypeEffectivenessDto) -> Result<(), AppError> {
        validate_multiplier(input.multiplier)
    }

    fn create_model(input: CreateTypeEffectivenessDto) -> type_effectiveness::ActiveModel {
        type_effectiveness::ActiveModel {
            attacking_type_id: ActiveValue::Set(input.attacking_type_id),
            defending_type_id: ActiveValue::Set(input.defending_type_id),
            multiplier: ActiveValue::Set(input.multiplier),
            ..Default::default()
        }
    }

    fn validate_update(input: &UpdateTypeEffectivenessDto) -> Result<(), AppError> {
        match input.multiplier {
            Some(multiplier) => validate_multiplier(multiplier),
            None => Ok(()),
        }
    }

    fn update_model(input: UpdateTypeEffectivenessDto) -> type_effectiveness::ActiveModel {
        let mut active = type_effectiveness::ActiveModel::default();
        if let Some(multiplier) = input.multiplier {
            active.multiplier = ActiveValue::Set(multiplier);
        }
        active
    }

    async fn load_relation(
        db: &DatabaseConnection,
        model: &type_effectiveness::Model,
        relation: &str,
    ) -> Result<serde_json::Value, AppError> {
        match relation {
            "attackingType" => {
                related_one::<PokemonTypeResource>(db, Some(model.attacking_type_id)).await
            }
            "defendingType" => {
                related_one::<PokemonTypeResource>(db, Some(model.defending_type_id)).await
            }
            _ => unknown_relation::<Self>(relation),
        }
    }

    async fn check_integrity(
        db: &DatabaseConnection,
        active: &type_effectiveness::ActiveModel,
    ) -> Result<(), AppError> {
        let attacking = column_value(Self::NAME, "attacking_type_id", &active.attacking_type_id)?;
        let defending = column_value(Self::NAME, "defending_type_id", &active.defending_type_id)?;

        require_active::<PokemonTypeResource>(db, attacking, "attackingTypeId").await?;
        require_active::<PokemonTypeResource>(db, defending, "defendingTypeId").await?;

        Ok(())
    }
}

fn validate_multiplier(multiplier: f64) -> Result<(), AppError> {
    if !multiplier.is_finite() || !(0.0..=MAX_MULTIPLIER).contains(&multiplier) {
        return Err(AppError::Validation(format!(
            "multiplier must be between 0 and {}",
            MAX_MULTIPLIER
        )));
    }
    Ok(())
}
