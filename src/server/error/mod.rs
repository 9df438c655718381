//! Error types for the Pokeparty server application.
//!
//! This module provides the unified `Error` type along with domain-specific error enums for
//! authentication, configuration and roster operations. All errors implement `IntoResponse`
//! so handlers can return them directly, and use `thiserror` for their `Display` and `Error`
//! implementations.

pub mod auth;
pub mod config;
pub mod retry;
pub mod roster;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, roster::RosterError},
};

/// Main error type for the Pokeparty server application.
///
/// Aggregates the domain-specific error types and external library errors so the `?`
/// operator can be used across repositories, services and controllers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (no user in session, stale session)
/// - Roster errors (validation, unknown species, full team)
/// - Storage failures (`DbErr`), always surfaced and never swallowed
/// - Catalog transport errors (`reqwest::Error`)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (user missing from session or database).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Roster error (missing species code, unknown species, full team).
    #[error(transparent)]
    RosterError(#[from] RosterError),
    /// Internal error indicating a bug in Pokeparty's code.
    #[error("Internal error with Pokeparty's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Species catalog request error (connection, timeout, non-success status, decoding).
    #[error(transparent)]
    CatalogError(#[from] reqwest::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Missing species code
/// - 401 Unauthorized - No user in session
/// - 403 Forbidden - Battle team already full
/// - 404 Not Found - Unknown species or user
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::RosterError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
