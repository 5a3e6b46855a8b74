use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PokemonType::Table)
                    .if_not_exists()
                    .col(pk_auto(PokemonType::Id))
                    .col(string(PokemonType::Name))
                    .col(string_null(PokemonType::Color))
                    .col(boolean(PokemonType::IsActive).default(true))
                    .col(timestamp_with_time_zone(PokemonType::CreatedAt))
                    .col(timestamp_with_time_zone(PokemonType::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PokemonType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PokemonType {
    Table,
    Id,
    Name,
    Color,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
