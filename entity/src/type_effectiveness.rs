use sea_orm::entity::prelude::*;

/// Damage multiplier applied when a move of the attacking type hits the defending type.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "type_effectiveness")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub attacking_type_id: i32,
    pub defending_type_id: i32,
    pub multiplier: f64,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pokemon_type::Entity",
        from = "Column::AttackingTypeId",
        to = "super::pokemon_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    AttackingType,
    #[sea_orm(
        belongs_to = "super::pokemon_type::Entity",
        from = "Column::DefendingTypeId",
        to = "super::pokemon_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    DefendingType,
}

impl ActiveModelBehavior for ActiveModel {}
