use std::collections::HashMap;

use futures::{stream, StreamExt};
use reqwest::StatusCode;
use sea_orm::DatabaseConnection;

use crate::{
    model::species::SpeciesDto,
    server::{
        catalog::{CatalogClient, CatalogSpecies},
        data::roster::RosterRepository,
        error::Error,
        service::retry::RetryContext,
    },
};

/// Catalog ID listed first when no start is requested
pub const DEFAULT_LIST_START: u32 = 1;
/// Number of species listed when no count is requested
pub const DEFAULT_LIST_COUNT: u32 = 6;
/// Upper bound on the number of species listed per request
pub const MAX_LIST_COUNT: u32 = 50;

pub struct SpeciesService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a CatalogClient,
}

impl<'a> SpeciesService<'a> {
    /// Creates a new instance of [`SpeciesService`]
    pub fn new(db: &'a DatabaseConnection, catalog: &'a CatalogClient) -> Self {
        Self { db, catalog }
    }

    /// Fetch a species from the catalog using the configured retry policy
    ///
    /// # Returns
    /// - `Some(CatalogSpecies)`: The catalog resolved the species
    /// - `None`: The catalog reported the species as unknown, or could not be reached
    ///   within the allowed attempts
    pub async fn fetch_species(&self, species_code: &str) -> Option<CatalogSpecies> {
        let ctx = RetryContext::from_catalog_config(self.catalog.config());

        let catalog = self.catalog.clone();
        let code = species_code.to_string();

        let result = ctx
            .execute_with_retry(&format!("catalog lookup for species {}", code), || {
                let catalog = catalog.clone();
                let code = code.clone();

                Box::pin(async move { catalog.fetch_species(&code).await })
            })
            .await;

        match result {
            Ok(species) => Some(species),
            Err(Error::CatalogError(e)) if e.status() == Some(StatusCode::NOT_FOUND) => {
                tracing::debug!("Species {} is unknown to the catalog", species_code);

                None
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch species {} from the catalog: {}",
                    species_code,
                    e
                );

                None
            }
        }
    }

    /// List species by consecutive catalog ID, merged with the user's roster flags
    ///
    /// Lookups run with the catalog's configured concurrency. Results keep catalog ID
    /// order; species that could not be fetched are left out.
    ///
    /// # Arguments
    /// - `user_id`: ID of the user whose favorite & battle team flags are merged in
    /// - `start`: First catalog ID, values below 1 are raised to 1
    /// - `count`: Number of IDs to list, capped at [`MAX_LIST_COUNT`]
    pub async fn list_species(
        &self,
        user_id: i32,
        start: u32,
        count: u32,
    ) -> Result<Vec<SpeciesDto>, Error> {
        let start = start.max(1);
        let count = count.min(MAX_LIST_COUNT);

        let species: Vec<CatalogSpecies> = stream::iter(start..start.saturating_add(count))
            .map(|id| async move { self.fetch_species(&id.to_string()).await })
            .buffered(self.catalog.config().concurrency.max(1))
            .filter_map(|species| async move { species })
            .collect()
            .await;

        let codes: Vec<String> = species.iter().map(|s| s.code.clone()).collect();
        let flags: HashMap<String, (bool, bool)> = RosterRepository::new(self.db)
            .find_many_by_codes(user_id, &codes)
            .await?
            .into_iter()
            .map(|entry| {
                (
                    entry.species_code,
                    (entry.is_favorite, entry.is_team_member),
                )
            })
            .collect();

        Ok(species
            .into_iter()
            .map(|species| {
                let (is_favorite, is_team_member) =
                    flags.get(&species.code).copied().unwrap_or_default();

                SpeciesDto {
                    species_code: species.code,
                    name: species.name,
                    sprite_url: species.sprite_url,
                    types: species.types,
                    base_stats: species.base_stats.into(),
                    is_favorite,
                    is_team_member,
                }
            })
            .collect())
    }
}
