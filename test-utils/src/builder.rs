use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Monster};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Monster)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, generated
    /// from entity models and executed in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables should be added in dependency order (tables with foreign keys
    /// after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every domain table in dependency order.
    ///
    /// Use this when a test touches monsters together with their families or
    /// collection memberships.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_bestiary_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_bestiary_tables(self) -> Self {
        self.with_table(User)
            .with_table(Family)
            .with_table(Monster)
            .with_table(Collection)
            .with_table(CollectionMonster)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
