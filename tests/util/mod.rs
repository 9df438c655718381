//! Helpers for building application state from the test context.

use std::time::Duration;

use pokeparty::server::{
    catalog::CatalogClient, config::CatalogConfig, model::app::AppState,
};
use pokeparty_test_utils::TestContext;

/// Extension trait for TestContext to create the catalog client & AppState
///
/// The test-utils crate can't depend on the main crate, so these conversions live here.
pub trait TestContextExt {
    /// Catalog client pointed at the mock catalog server with millisecond backoff
    fn catalog_client(&self) -> CatalogClient;

    fn to_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn catalog_client(&self) -> CatalogClient {
        let mut config = CatalogConfig::new(&self.catalog_url());
        config.initial_backoff = Duration::from_millis(10);
        config.request_timeout = Duration::from_millis(500);

        CatalogClient::new(config).expect("Failed to build catalog client")
    }

    fn to_app_state(&self) -> AppState {
        AppState::new(self.db.clone(), self.catalog_client())
    }
}
