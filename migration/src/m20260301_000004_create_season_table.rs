use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_league_table::League;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Season::Table)
                    .if_not_exists()
                    .col(pk_auto(Season::Id))
                    .col(integer(Season::LeagueId))
                    .col(string(Season::Name))
                    .col(timestamp_with_time_zone_null(Season::StartsAt))
                    .col(timestamp_with_time_zone_null(Season::EndsAt))
                    .col(boolean(Season::IsActive).default(true))
                    .col(timestamp_with_time_zone(Season::CreatedAt))
                    .col(timestamp_with_time_zone(Season::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_season_league_id")
                            .from(Season::Table, Season::LeagueId)
                            .to(League::Table, League::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Season::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Season {
    Table,
    Id,
    LeagueId,
    Name,
    StartsAt,
    EndsAt,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
