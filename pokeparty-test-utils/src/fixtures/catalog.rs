//! Species catalog payloads and mock endpoints.

use mockito::Mock;
use serde_json::{json, Value};

use crate::TestContext;

/// Create a catalog species payload in the shape returned by `GET /pokemon/{code}`.
///
/// Base stats are derived from the ID so different species carry different values:
/// hp = id + 10, attack = id + 20, defense = id + 30.
///
/// # Arguments
/// - `id` - Catalog ID of the species
/// - `name` - Lowercase species name
/// - `types` - Type names in slot order
pub fn mock_species_payload(id: i64, name: &str, types: &[&str]) -> Value {
    let types: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(i, t)| json!({ "slot": i + 1, "type": { "name": t, "url": "" } }))
        .collect();

    json!({
        "id": id,
        "name": name,
        "sprites": {
            "front_default": format!("https://sprites.example/pokemon/{}.png", id)
        },
        "types": types,
        "stats": [
            { "base_stat": id + 10, "effort": 0, "stat": { "name": "hp", "url": "" } },
            { "base_stat": id + 20, "effort": 0, "stat": { "name": "attack", "url": "" } },
            { "base_stat": id + 30, "effort": 0, "stat": { "name": "defense", "url": "" } },
            { "base_stat": 50, "effort": 0, "stat": { "name": "speed", "url": "" } }
        ]
    })
}

impl TestContext {
    pub fn catalog<'a>(&'a mut self) -> CatalogFixtures<'a> {
        CatalogFixtures { context: self }
    }
}

pub struct CatalogFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> CatalogFixtures<'a> {
    /// Create a mock endpoint at `/pokemon/{path_code}` returning a species payload
    pub fn create_species_endpoint(
        &mut self,
        path_code: &str,
        id: i64,
        name: &str,
        types: &[&str],
        expected_requests: usize,
    ) -> Mock {
        self.context
            .server
            .mock("GET", format!("/pokemon/{}", path_code).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(mock_species_payload(id, name, types).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint at `/pokemon/{path_code}` returning an error status
    pub fn create_species_error_endpoint(
        &mut self,
        path_code: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.context
            .server
            .mock("GET", format!("/pokemon/{}", path_code).as_str())
            .with_status(status)
            .expect(expected_requests)
            .create()
    }
}
