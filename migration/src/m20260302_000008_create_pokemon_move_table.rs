use sea_orm_migration::{prelude::*, schema::*};

use super::m20260302_000007_create_pokemon_type_table::PokemonType;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PokemonMove::Table)
                    .if_not_exists()
                    .col(pk_auto(PokemonMove::Id))
                    .col(string(PokemonMove::Name))
                    .col(integer(PokemonMove::TypeId))
                    .col(string(PokemonMove::Category))
                    .col(integer_null(PokemonMove::Power))
                    .col(integer_null(PokemonMove::Accuracy))
                    .col(integer(PokemonMove::Pp))
                    .col(boolean(PokemonMove::IsActive).default(true))
                    .col(timestamp_with_time_zone(PokemonMove::CreatedAt))
                    .col(timestamp_with_time_zone(PokemonMove::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pokemon_move_type_id")
                            .from(PokemonMove::Table, PokemonMove::TypeId)
                            .to(PokemonType::Table, PokemonType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PokemonMove::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PokemonMove {
    Table,
    Id,
    Name,
    TypeId,
    Category,
    Power,
    Accuracy,
    Pp,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
