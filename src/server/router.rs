//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/auth/logout` - Logout current user
/// - `GET /api/auth/user` - Get current user information
/// - `POST /api/roster/favorite` - Toggle a species in or out of favorites
/// - `POST /api/roster/team` - Toggle a species in or out of the battle team
/// - `GET /api/roster` - List the current user's roster
/// - `GET /api/species` - List catalog species with the current user's flags
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`, with Swagger UI
/// served at `/api/docs`.
///
/// # Example
/// ```ignore
/// let app_state = AppState::new(db, catalog);
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Pokeparty", description = "Pokeparty API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::roster::ROSTER_TAG, description = "Favorites & battle team API routes"),
        (name = controller::species::SPECIES_TAG, description = "Species catalog API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::roster::toggle_favorite))
        .routes(routes!(controller::roster::toggle_team))
        .routes(routes!(controller::roster::get_roster))
        .routes(routes!(controller::species::list_species))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
