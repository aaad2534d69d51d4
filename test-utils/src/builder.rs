use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts with a configurable database schema.
///
/// Add the entity tables a test needs, then call `build()` to get a
/// `TestContext` backed by an in-memory SQLite database with those tables
/// created.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Planet, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Planet)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the schema.
    ///
    /// The CREATE TABLE statement is derived from the SeaORM entity using the
    /// SQLite backend. Add tables in dependency order; tables with foreign
    /// keys go after the tables they reference.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table of the application schema in dependency order.
    ///
    /// Use this for tests that exercise favorites, which need the catalog
    /// tables, the user table, and both association tables.
    pub fn with_all_tables(self) -> Self {
        self.with_table(Person)
            .with_table(Planet)
            .with_table(User)
            .with_table(UserFavoritePlanet)
            .with_table(UserFavoriteCharacter)
    }

    /// Creates the test context and executes the configured CREATE TABLE statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Database ready with all requested tables
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
