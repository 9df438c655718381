//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use mockito::Mock;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Species endpoint configuration: (path code, catalog ID, name, types, expected requests)
type SpeciesEndpoint = (String, i64, String, Vec<String>, usize);

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables,
/// fixtures, and mock catalog endpoints. Methods can be chained together and finalized
/// with `build()` to create a complete test context.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_roster_tables: bool,

    // Database fixtures to insert
    include_species_types: bool,
    users: Vec<String>,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    species_endpoints: Vec<SpeciesEndpoint>,
    species_error_endpoints: Vec<(String, usize, usize)>, // (path code, status, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_roster_tables: false,
            include_species_types: false,
            users: Vec::new(),
            mock_builders: Vec::new(),
            species_endpoints: Vec::new(),
            species_error_endpoints: Vec::new(),
        }
    }

    /// Add the user, species type and roster entry tables to the test database.
    ///
    /// Also creates the unique (user_id, species_code) index on roster entries which
    /// upserts rely on.
    pub fn with_roster_tables(mut self) -> Self {
        self.include_roster_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pokeparty_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), pokeparty_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(AppUser)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Seed the species type reference table with the standard 18 labels.
    ///
    /// Requires the species type table, see [`Self::with_roster_tables`].
    pub fn with_species_types(mut self) -> Self {
        self.include_species_types = true;
        self
    }

    /// Insert a user with the provided login into the database.
    ///
    /// Users are inserted in call order, so the first user gets ID 1.
    pub fn with_user(mut self, login: impl Into<String>) -> Self {
        self.users.push(login.into());
        self
    }

    /// Add a mock species endpoint to the catalog server.
    ///
    /// Creates a mock HTTP endpoint at `/pokemon/{path_code}` that returns a catalog payload
    /// for the species. The mock will verify it was called exactly `expected_requests` times.
    ///
    /// # Arguments
    /// - `path_code` - Species code as it appears in the request path (ID or lowercase name)
    /// - `id` - Catalog ID returned in the payload, which becomes the canonical species code
    /// - `name` - Lowercase species name returned in the payload
    /// - `types` - Type names in slot order
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_species_endpoint(
        mut self,
        path_code: impl Into<String>,
        id: i64,
        name: impl Into<String>,
        types: &[&str],
        expected_requests: usize,
    ) -> Self {
        self.species_endpoints.push((
            path_code.into(),
            id,
            name.into(),
            types.iter().map(|t| t.to_string()).collect(),
            expected_requests,
        ));
        self
    }

    /// Add a mock species endpoint returning an error status without a body.
    pub fn with_species_error_endpoint(
        mut self,
        path_code: impl Into<String>,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.species_error_endpoints
            .push((path_code.into(), status, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Allows complete customization of mock endpoint behavior by providing direct access
    /// to the mockito ServerGuard. Use this for endpoints not covered by helper methods.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables and indexes (roster tables if specified, then custom tables)
    /// 2. Inserts database fixtures (species types, users)
    /// 3. Creates mock HTTP endpoints (custom endpoints, then catalog shortcuts)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();
        let mut all_indexes: Vec<IndexCreateStatement> = Vec::new();

        if self.include_roster_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::AppUser),
                schema.create_table_from_entity(entity::prelude::SpeciesType),
                schema.create_table_from_entity(entity::prelude::RosterEntry),
            ]);
            all_indexes.push(
                Index::create()
                    .name("idx_roster_entry_user_id_species_code")
                    .table(entity::prelude::RosterEntry)
                    .col(entity::roster_entry::Column::UserId)
                    .col(entity::roster_entry::Column::SpeciesCode)
                    .unique()
                    .to_owned(),
            );
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables, all_indexes).await?;

        // 2. Insert fixtures
        if self.include_species_types {
            context.roster().insert_species_types().await?;
        }

        for login in self.users {
            context.user().insert_user(&login).await?;
        }

        // 3. Create mock endpoints
        // Note: Custom endpoints are created first to allow proper sequential mockito matching
        // when tests need to create multiple mocks for the same path (e.g., error then success)
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut context.server));
        }

        for (path_code, id, name, types, expected) in self.species_endpoints {
            let types: Vec<&str> = types.iter().map(String::as_str).collect();
            mocks.push(
                context
                    .catalog()
                    .create_species_endpoint(&path_code, id, &name, &types, expected),
            );
        }

        for (path_code, status, expected) in self.species_error_endpoints {
            mocks.push(
                context
                    .catalog()
                    .create_species_error_endpoint(&path_code, status, expected),
            );
        }

        // Store mocks in context so they live as long as the test
        context.mocks = mocks;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
