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
/// use entity::prelude::{Beer, Category, BeerCategory};
///
/// let test = TestBuilder::new()
///     .with_table(Beer)
///     .with_table(Category)
///     .with_table(BeerCategory)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
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

    /// Adds the beer catalogue tables: Beer, Category and the BeerCategory join table.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_catalogue_tables(self) -> Self {
        self.with_table(Beer)
            .with_table(Category)
            .with_table(BeerCategory)
    }

    /// Adds every table of the brewery schema in dependency order.
    ///
    /// Use this when testing order functionality, which touches customers, beers,
    /// order lines and shipments.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_brewery_tables(self) -> Self {
        self.with_catalogue_tables()
            .with_table(Customer)
            .with_table(BeerOrder)
            .with_table(BeerOrderLine)
            .with_table(BeerOrderShipment)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
