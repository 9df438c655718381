//! HTTP controller endpoints for the Pokeparty web API.
//!
//! This module contains Axum handlers for the session user, the roster toggles and listing,
//! and the species listing. Controllers read the authenticated user from the session,
//! delegate to services and return appropriate HTTP responses. They use utoipa for OpenAPI
//! documentation.

pub mod auth;
pub mod roster;
pub mod species;
pub mod util;
