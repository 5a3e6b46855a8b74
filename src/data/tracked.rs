use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Select};

/// Entity carrying the bookkeeping columns shared by every table.
///
/// Rows are never physically deleted: `is_active = false` hides them from every default read.
pub trait TrackedEntity: EntityTrait {
    const ID: Self::Column;
    const IS_ACTIVE: Self::Column;
    const CREATED_AT: Self::Column;
    const UPDATED_AT: Self::Column;

    /// `SELECT` restricted to rows that have not been soft-deleted.
    fn find_active() -> Select<Self> {
        Self::find().filter(Self::IS_ACTIVE.eq(true))
    }
}

macro_rules! tracked_entity {
    ($($module:ident),+ $(,)?) => {
        $(
            impl TrackedEntity for entity::$module::Entity {
                const ID: entity::$module::Column = entity::$module::Column::Id;
                const IS_ACTIVE: entity::$module::Column = entity::$module::Column::IsActive;
                const CREATED_AT: entity::$module::Column = entity::$module::Column::CreatedAt;
                const UPDATED_AT: entity::$module::Column = entity::$module::Column::UpdatedAt;
            }
        )+
    };
}

tracked_entity!(
    user,
    league,
    league_user,
    season,
    team,
    league_match,
    pokemon_type,
    pokemon_move,
    type_effectiveness,
    pokemon,
);
