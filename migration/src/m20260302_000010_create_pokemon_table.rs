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
                    .table(Pokemon::Table)
                    .if_not_exists()
                    .col(pk_auto(Pokemon::Id))
                    .col(integer(Pokemon::DexId))
                    .col(string(Pokemon::Name))
                    .col(integer(Pokemon::Hp))
                    .col(integer(Pokemon::Attack))
                    .col(integer(Pokemon::Defense))
                    .col(integer(Pokemon::SpecialAttack))
                    .col(integer(Pokemon::SpecialDefense))
                    .col(integer(Pokemon::Speed))
                    .col(integer(Pokemon::PrimaryTypeId))
                    .col(integer_null(Pokemon::SecondaryTypeId))
                    .col(boolean(Pokemon::IsActive).default(true))
                    .col(timestamp_with_time_zone(Pokemon::CreatedAt))
                    .col(timestamp_with_time_zone(Pokemon::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pokemon_primary_type_id")
                            .from(Pokemon::Table, Pokemon::PrimaryTypeId)
                            .to(PokemonType::Table, PokemonType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pokemon_secondary_type_id")
                            .from(Pokemon::Table, Pokemon::SecondaryTypeId)
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
            .drop_table(Table::drop().table(Pokemon::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pokemon {
    Table,
    Id,
    DexId,
    Name,
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
    PrimaryTypeId,
    SecondaryTypeId,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
