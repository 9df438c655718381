use sea_orm::DatabaseConnection;

use crate::server::catalog::CatalogClient;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub catalog: CatalogClient,
}

impl AppState {
    pub fn new(db: DatabaseConnection, catalog: CatalogClient) -> Self {
        Self { db, catalog }
    }
}
