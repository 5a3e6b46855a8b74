use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts backed by an in-memory SQLite database.
///
/// Tables are generated from the SeaORM entities and created in the order they were added,
/// so parents must be added before the tables referencing them.
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(League)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds the table generated from `entity` to the schema.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the competitive league tables: users, leagues, memberships, seasons, teams and
    /// matches.
    pub fn with_league_tables(self) -> Self {
        self.with_table(User)
            .with_table(League)
            .with_table(LeagueUser)
            .with_table(Season)
            .with_table(Team)
            .with_table(LeagueMatch)
    }

    /// Adds the Pokémon reference tables: types, moves, type effectiveness and pokemon.
    pub fn with_pokemon_tables(self) -> Self {
        self.with_table(PokemonType)
            .with_table(PokemonMove)
            .with_table(TypeEffectiveness)
            .with_table(Pokemon)
    }

    /// Adds every table of the application.
    pub fn with_all_tables(self) -> Self {
        self.with_league_tables().with_pokemon_tables()
    }

    /// Connects to a fresh in-memory database and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with all tables created
    /// - `Err(TestError::Database)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
