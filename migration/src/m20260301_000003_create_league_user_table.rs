use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User, m20260301_000002_create_league_table::League,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeagueUser::Table)
                    .if_not_exists()
                    .col(pk_auto(LeagueUser::Id))
                    .col(integer(LeagueUser::LeagueId))
                    .col(integer(LeagueUser::UserId))
                    .col(boolean(LeagueUser::IsModerator).default(false))
                    .col(boolean(LeagueUser::IsActive).default(true))
                    .col(timestamp_with_time_zone(LeagueUser::CreatedAt))
                    .col(timestamp_with_time_zone(LeagueUser::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_user_league_id")
                            .from(LeagueUser::Table, LeagueUser::LeagueId)
                            .to(League::Table, League::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_user_user_id")
                            .from(LeagueUser::Table, LeagueUser::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_league_user_user_id")
                    .table(LeagueUser::Table)
                    .col(LeagueUser::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LeagueUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LeagueUser {
    Table,
    Id,
    LeagueId,
    UserId,
    IsModerator,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
