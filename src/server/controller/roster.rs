use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        roster::{RosterEntryDto, ToggleDto, ToggleRequestDto},
    },
    server::{
        controller::util::session::{clear_session_if_stale, get_user_id_from_session},
        error::Error,
        model::{app::AppState, roster::ToggleOutcome},
        service::roster::RosterService,
    },
};

pub static ROSTER_TAG: &str = "roster";

/// Toggle a species in or out of the user's favorites
///
/// Creates the user's roster entry for the species on first use.
#[utoipa::path(
    post,
    path = "/api/roster/favorite",
    tag = ROSTER_TAG,
    request_body = ToggleRequestDto,
    responses(
        (status = 200, description = "Favorite flag toggled", body = ToggleDto),
        (status = 400, description = "Species code is missing", body = ErrorDto),
        (status = 401, description = "No user in session", body = ErrorDto),
        (status = 404, description = "Species or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_favorite(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<ToggleRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&session).await?;
    let species_code = request.species_code.unwrap_or_default();

    let outcome = match RosterService::new(&state.db, &state.catalog)
        .toggle_favorite(user_id, &species_code)
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => return Err(clear_session_if_stale(&session, e).await),
    };

    Ok((StatusCode::OK, Json(toggle_dto(outcome, "favorites"))))
}

/// Toggle a species in or out of the user's battle team
///
/// Adding fails with 403 once the team holds 6 members; the response then carries the
/// species' unchanged flag.
#[utoipa::path(
    post,
    path = "/api/roster/team",
    tag = ROSTER_TAG,
    request_body = ToggleRequestDto,
    responses(
        (status = 200, description = "Battle team flag toggled", body = ToggleDto),
        (status = 400, description = "Species code is missing", body = ErrorDto),
        (status = 401, description = "No user in session", body = ErrorDto),
        (status = 403, description = "Battle team is full", body = ToggleDto),
        (status = 404, description = "Species or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_team(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<ToggleRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&session).await?;
    let species_code = request.species_code.unwrap_or_default();

    let outcome = match RosterService::new(&state.db, &state.catalog)
        .toggle_team(user_id, &species_code)
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => return Err(clear_session_if_stale(&session, e).await),
    };

    Ok((StatusCode::OK, Json(toggle_dto(outcome, "battle team"))))
}

/// List all species in the user's roster
#[utoipa::path(
    get,
    path = "/api/roster",
    tag = ROSTER_TAG,
    responses(
        (status = 200, description = "Success when retrieving the roster", body = Vec<RosterEntryDto>),
        (status = 401, description = "No user in session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_roster(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&session).await?;

    let roster = RosterService::new(&state.db, &state.catalog)
        .list_roster(user_id)
        .await?;

    Ok((StatusCode::OK, Json(roster)))
}

fn toggle_dto(outcome: ToggleOutcome, collection: &str) -> ToggleDto {
    ToggleDto {
        message: format!("{} {} {}", outcome.name, outcome.action, collection),
        updated_flag: outcome.flag,
    }
}
