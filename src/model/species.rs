use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BaseStatsDto {
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
}

/// Catalog data for a species merged with the requesting user's roster flags
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SpeciesDto {
    pub species_code: String,
    pub name: String,
    pub sprite_url: Option<String>,
    pub types: Vec<String>,
    pub base_stats: BaseStatsDto,
    pub is_favorite: bool,
    pub is_team_member: bool,
}

/// Query parameters for listing species by catalog ID
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SpeciesQueryDto {
    /// First catalog ID to list, defaults to 1
    pub start: Option<u32>,
    /// Number of species to list, defaults to 6 and is capped at 50
    pub count: Option<u32>,
}
