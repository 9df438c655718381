use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        species::{SpeciesDto, SpeciesQueryDto},
    },
    server::{
        controller::util::session::get_user_id_from_session,
        error::Error,
        model::app::AppState,
        service::species::{SpeciesService, DEFAULT_LIST_COUNT, DEFAULT_LIST_START},
    },
};

pub static SPECIES_TAG: &str = "species";

/// List species from the catalog by consecutive ID
///
/// Each species carries the user's favorite and battle team flags. Species the catalog
/// could not provide are left out.
#[utoipa::path(
    get,
    path = "/api/species",
    tag = SPECIES_TAG,
    params(SpeciesQueryDto),
    responses(
        (status = 200, description = "Success when listing species", body = Vec<SpeciesDto>),
        (status = 401, description = "No user in session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_species(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<SpeciesQueryDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&session).await?;

    let species = SpeciesService::new(&state.db, &state.catalog)
        .list_species(
            user_id,
            query.start.unwrap_or(DEFAULT_LIST_START),
            query.count.unwrap_or(DEFAULT_LIST_COUNT),
        )
        .await?;

    Ok((StatusCode::OK, Json(species)))
}
