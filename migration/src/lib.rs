pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_league_table;
mod m20260301_000003_create_league_user_table;
mod m20260301_000004_create_season_table;
mod m20260301_000005_create_team_table;
mod m20260301_000006_create_league_match_table;
mod m20260302_000007_create_pokemon_type_table;
mod m20260302_000008_create_pokemon_move_table;
mod m20260302_000009_create_type_effectiveness_table;
mod m20260302_000010_create_pokemon_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_league_table::Migration),
            Box::new(m20260301_000003_create_league_user_table::Migration),
            Box::new(m20260301_000004_create_season_table::Migration),
            Box::new(m20260301_000005_create_team_table::Migration),
            Box::new(m20260301_000006_create_league_match_table::Migration),
            Box::new(m20260302_000007_create_pokemon_type_table::Migration),
            Box::new(m20260302_000008_create_pokemon_move_table::Migration),
            Box::new(m20260302_000009_create_type_effectiveness_table::Migration),
            Box::new(m20260302_000010_create_pokemon_table::Migration),
        ]
    }
}
