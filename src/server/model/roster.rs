//! Roster domain types used by the team membership controller.
//!
//! A roster entry's battle team membership is modelled as an explicit two-state
//! [`TeamStatus`] whose only transitions are those requested through a toggle: a member is
//! removed, a non-member is added (subject to the team size cap).

use std::fmt;

use crate::server::{catalog::CatalogSpecies, model::db::RosterEntryModel};

/// Maximum number of active battle team members per user.
pub const MAX_TEAM_SIZE: u64 = 6;

/// Battle team membership of a single roster entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TeamStatus {
    Member,
    NotMember,
}

impl TeamStatus {
    pub fn is_member(self) -> bool {
        matches!(self, Self::Member)
    }

    /// The action a toggle request performs from this state.
    ///
    /// Only [`ToggleAction::Added`] requires a capacity check.
    pub fn toggle_action(self) -> ToggleAction {
        match self {
            Self::Member => ToggleAction::Removed,
            Self::NotMember => ToggleAction::Added,
        }
    }

    /// The state reached after performing `action`.
    pub fn after(action: ToggleAction) -> Self {
        match action {
            ToggleAction::Added => Self::Member,
            ToggleAction::Removed => Self::NotMember,
        }
    }
}

impl From<bool> for TeamStatus {
    fn from(is_team_member: bool) -> Self {
        if is_team_member {
            Self::Member
        } else {
            Self::NotMember
        }
    }
}

/// What a toggle did to the flag it targeted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Added,
    Removed,
}

impl ToggleAction {
    /// Action flipping a plain flag with no capacity constraint, such as the favorite flag.
    pub fn flipping(current: bool) -> Self {
        if current {
            Self::Removed
        } else {
            Self::Added
        }
    }
}

impl fmt::Display for ToggleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added => write!(f, "added to"),
            Self::Removed => write!(f, "removed from"),
        }
    }
}

/// Result of a successful favorite or battle team toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Canonical species code of the toggled entry
    pub species_code: String,
    /// Cached species name of the toggled entry
    pub name: String,
    pub action: ToggleAction,
    /// The flag's value after the toggle was persisted
    pub flag: bool,
}

/// A roster entry held in memory by the controller before being persisted.
///
/// Either loaded from the store or synthesized from catalog data for a species the user
/// has never touched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterEntry {
    pub user_id: i32,
    pub species_code: String,
    pub name: String,
    pub sprite_url: Option<String>,
    pub species_type_id: Option<i32>,
    pub is_favorite: bool,
    pub team: TeamStatus,
}

impl RosterEntry {
    /// Synthesize a new, not yet persisted entry with both flags unset.
    pub fn from_species(
        user_id: i32,
        species: &CatalogSpecies,
        species_type_id: Option<i32>,
    ) -> Self {
        Self {
            user_id,
            species_code: species.code.clone(),
            name: species.name.clone(),
            sprite_url: species.sprite_url.clone(),
            species_type_id,
            is_favorite: false,
            team: TeamStatus::NotMember,
        }
    }
}

impl From<RosterEntryModel> for RosterEntry {
    fn from(model: RosterEntryModel) -> Self {
        Self {
            user_id: model.user_id,
            species_code: model.species_code,
            name: model.name,
            sprite_url: model.sprite_url,
            species_type_id: model.species_type_id,
            is_favorite: model.is_favorite,
            team: TeamStatus::from(model.is_team_member),
        }
    }
}
