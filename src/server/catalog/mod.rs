//! Species catalog collaborator.
//!
//! A thin HTTP client for the external species catalog (PokéAPI-compatible). Each call to
//! [`CatalogClient::fetch_species`] is a single attempt bounded by the configured request
//! timeout; retries and backoff are applied by
//! [`SpeciesService`](crate::server::service::species::SpeciesService).

pub mod model;

pub use model::{BaseStats, CatalogSpecies};

use crate::server::{catalog::model::SpeciesPayload, config::CatalogConfig, error::Error};

#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Creates a new catalog client using the provided settings
    pub fn new(config: CatalogConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("pokeparty/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Fetch a species by its catalog ID or name in a single attempt
    ///
    /// # Returns
    /// - `Ok(CatalogSpecies)`: Species data with a canonical numeric species code
    /// - `Err(Error::CatalogError(_))`: Timeout, connection failure, non-success status (e.g. 404 for
    ///   an unknown species) or a payload that could not be decoded
    pub async fn fetch_species(&self, species_code: &str) -> Result<CatalogSpecies, Error> {
        let url = format!(
            "{}/pokemon/{}",
            self.config.base_url,
            species_code.trim().to_lowercase()
        );

        let payload: SpeciesPayload = self
            .http
            .get(&url)
            .timeout(self.config.request_timeout)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(CatalogSpecies::from(payload))
    }
}
