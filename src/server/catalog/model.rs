use serde::Deserialize;

use crate::model::species::BaseStatsDto;

/// Species data as returned by the catalog, normalized for display and storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogSpecies {
    /// Canonical species code, the catalog's numeric ID as a string
    pub code: String,
    /// Species name with its first letter capitalized
    pub name: String,
    pub sprite_url: Option<String>,
    /// Type names in slot order, as named by the catalog (e.g. "fire")
    pub types: Vec<String>,
    pub base_stats: BaseStats,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BaseStats {
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
}

impl CatalogSpecies {
    /// Label of the primary type as stored in the species type reference table (e.g. "Fire")
    pub fn primary_type_label(&self) -> Option<String> {
        self.types.first().map(|t| capitalize(t))
    }
}

impl From<BaseStats> for BaseStatsDto {
    fn from(stats: BaseStats) -> Self {
        Self {
            hp: stats.hp,
            attack: stats.attack,
            defense: stats.defense,
        }
    }
}

#[derive(Deserialize)]
pub(super) struct SpeciesPayload {
    id: i64,
    name: String,
    #[serde(default)]
    sprites: SpritesPayload,
    #[serde(default)]
    types: Vec<TypeSlotPayload>,
    #[serde(default)]
    stats: Vec<StatPayload>,
}

#[derive(Deserialize, Default)]
struct SpritesPayload {
    front_default: Option<String>,
}

#[derive(Deserialize)]
struct TypeSlotPayload {
    slot: i32,
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Deserialize)]
struct StatPayload {
    base_stat: i32,
    stat: NamedResource,
}

#[derive(Deserialize)]
struct NamedResource {
    name: String,
}

impl From<SpeciesPayload> for CatalogSpecies {
    fn from(payload: SpeciesPayload) -> Self {
        let mut type_slots = payload.types;
        type_slots.sort_by_key(|t| t.slot);

        let mut base_stats = BaseStats::default();
        for stat in payload.stats {
            match stat.stat.name.as_str() {
                "hp" => base_stats.hp = stat.base_stat,
                "attack" => base_stats.attack = stat.base_stat,
                "defense" => base_stats.defense = stat.base_stat,
                _ => {}
            }
        }

        Self {
            code: payload.id.to_string(),
            name: capitalize(&payload.name),
            sprite_url: payload.sprites.front_default,
            types: type_slots.into_iter().map(|t| t.kind.name).collect(),
            base_stats,
        }
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
