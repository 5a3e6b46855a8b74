use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pokemon")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// National Pokédex number.
    pub dex_id: i32,
    pub name: String,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub special_attack: i32,
    pub special_defense: i32,
    pub speed: i32,
    pub primary_type_id: i32,
    pub secondary_type_id: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pokemon_type::Entity",
        from = "Column::PrimaryTypeId",
        to = "super::pokemon_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    PrimaryType,
    #[sea_orm(
        belongs_to = "super::pokemon_type::Entity",
        from = "Column::SecondaryTypeId",
        to = "super::pokemon_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    SecondaryType,
}

impl ActiveModelBehavior for ActiveModel {}
