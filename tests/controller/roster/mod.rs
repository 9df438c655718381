//! Tests for roster controller endpoints.
//!
//! Covers the favorite & battle team toggles and the roster listing, including the
//! status codes each roster error maps to.

mod get_roster;
mod toggle_favorite;
mod toggle_team;

use pokeparty::model::roster::ToggleRequestDto;

fn request(species_code: &str) -> ToggleRequestDto {
    ToggleRequestDto {
        species_code: Some(species_code.to_string()),
    }
}
