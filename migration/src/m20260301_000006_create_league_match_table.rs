use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_league_table::League, m20260301_000004_create_season_table::Season,
    m20260301_000005_create_team_table::Team,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeagueMatch::Table)
                    .if_not_exists()
                    .col(pk_auto(LeagueMatch::Id))
                    .col(integer(LeagueMatch::LeagueId))
                    .col(integer(LeagueMatch::SeasonId))
                    .col(integer(LeagueMatch::HomeTeamId))
                    .col(integer(LeagueMatch::AwayTeamId))
                    .col(integer_null(LeagueMatch::HomeScore))
                    .col(integer_null(LeagueMatch::AwayScore))
                    .col(timestamp_with_time_zone_null(LeagueMatch::PlayedAt))
                    .col(boolean(LeagueMatch::IsActive).default(true))
                    .col(timestamp_with_time_zone(LeagueMatch::CreatedAt))
                    .col(timestamp_with_time_zone(LeagueMatch::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_match_league_id")
                            .from(LeagueMatch::Table, LeagueMatch::LeagueId)
                            .to(League::Table, League::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_match_season_id")
                            .from(LeagueMatch::Table, LeagueMatch::SeasonId)
                            .to(Season::Table, Season::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_match_home_team_id")
                            .from(LeagueMatch::Table, LeagueMatch::HomeTeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_match_away_team_id")
                            .from(LeagueMatch::Table, LeagueMatch::AwayTeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LeagueMatch::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LeagueMatch {
    Table,
    Id,
    LeagueId,
    SeasonId,
    HomeTeamId,
    AwayTeamId,
    HomeScore,
    AwayScore,
    PlayedAt,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
