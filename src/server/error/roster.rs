use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::ErrorDto, roster::ToggleDto};

/// Expected business outcomes of roster operations that leave the store untouched.
///
/// None of these are faults, they are logged at debug level only.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Species code is required")]
    MissingSpeciesCode,
    #[error("Species {0:?} could not be found in the species catalog")]
    SpeciesNotFound(String),
    #[error("Battle team for user ID {user_id} is full, species {species_code:?} was not added")]
    TeamFull {
        user_id: i32,
        species_code: String,
        /// Membership flag of the species as it was before the rejected add
        current_flag: bool,
    },
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingSpeciesCode => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Species code is required".to_string(),
                }),
            )
                .into_response(),
            Self::SpeciesNotFound(species_code) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: format!("Species {} not found in the species catalog", species_code),
                }),
            )
                .into_response(),
            Self::TeamFull { current_flag, .. } => (
                StatusCode::FORBIDDEN,
                Json(ToggleDto {
                    message: "Battle team limit of 6 members reached".to_string(),
                    updated_flag: current_flag,
                }),
            )
                .into_response(),
        }
    }
}
