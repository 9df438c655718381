use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Request body for the favorite and battle team toggle endpoints
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ToggleRequestDto {
    /// Species identifier as known to the species catalog, either its ID or its name
    pub species_code: Option<String>,
}

/// Result of a favorite or battle team toggle
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ToggleDto {
    pub message: String,
    /// The flag's value after the request, or its unchanged value if the request was rejected
    pub updated_flag: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RosterEntryDto {
    pub species_code: String,
    pub name: String,
    pub sprite_url: Option<String>,
    pub species_type: Option<String>,
    pub is_favorite: bool,
    pub is_team_member: bool,
    pub updated_at: NaiveDateTime,
}
