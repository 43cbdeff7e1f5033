use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Person, Vehicle};
///
/// let test = TestBuilder::new()
///     .with_table(Person)
///     .with_table(Vehicle)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys should be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables backing the people and vehicle registry.
    ///
    /// Adds, in dependency order:
    /// - User
    /// - Person
    /// - Vehicle
    /// - AuditLog
    pub fn with_registry_tables(self) -> Self {
        self.with_table(User)
            .with_table(Person)
            .with_table(Vehicle)
            .with_table(AuditLog)
    }

    /// Adds every table of the gatehouse schema.
    ///
    /// Adds, in dependency order:
    /// - User
    /// - Person
    /// - Vehicle
    /// - ControlPoint
    /// - Access
    /// - Alert
    /// - AuditLog
    /// - Event
    ///
    /// Control points are not seeded; use `factory::control_point::create_gates`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_gate_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_gate_tables(self) -> Self {
        self.with_table(User)
            .with_table(Person)
            .with_table(Vehicle)
            .with_table(ControlPoint)
            .with_table(Access)
            .with_table(Alert)
            .with_table(AuditLog)
            .with_table(Event)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
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
