//! Tests for HTTP controller endpoints.
//!
//! Integration tests for the application's HTTP controllers, verifying request handling,
//! response status & body, session handling and error mapping for all API endpoints.

mod auth;
mod roster;
mod species;

use axum::{body::to_bytes, response::Response};
use serde::de::DeserializeOwned;

/// Read a JSON response body
async fn json_body<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Failed to deserialize response body")
}
