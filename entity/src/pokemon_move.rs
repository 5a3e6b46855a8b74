use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pokemon_move")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub type_id: i32,
    /// One of "physical", "special" or "status".
    pub category: String,
    pub power: Option<i32>,
    pub accuracy: Option<i32>,
    pub pp: i32,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pokemon_type::Entity",
        from = "Column::TypeId",
        to = "super::pokemon_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    PokemonType,
}

impl ActiveModelBehavior for ActiveModel {}
