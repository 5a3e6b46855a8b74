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
                    .table(TypeEffectiveness::Table)
                    .if_not_exists()
                    .col(pk_auto(TypeEffectiveness::Id))
                    .col(integer(TypeEffectiveness::AttackingTypeId))
                    .col(integer(TypeEffectiveness::DefendingTypeId))
                    .col(double(TypeEffectiveness::Multiplier))
                    .col(boolean(TypeEffectiveness::IsActive).default(true))
                    .col(timestamp_with_time_zone(TypeEffectiveness::CreatedAt))
                    .col(timestamp_with_time_zone(TypeEffectiveness::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_type_effectiveness_attacking_type_id")
                            .from(TypeEffectiveness::Table, TypeEffectiveness::AttackingTypeId)
                            .to(PokemonType::Table, PokemonType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_type_effectiveness_defending_type_id")
                            .from(TypeEffectiveness::Table, TypeEffectiveness::DefendingTypeId)
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
            .drop_table(Table::drop().table(TypeEffectiveness::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TypeEffectiveness {
    Table,
    Id,
    AttackingTypeId,
    DefendingTypeId,
    Multiplier,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
