//! Service layer for business logic.
//!
//! Services coordinate between repositories and the species catalog: retry logic for
//! transient failures, species lookups and listing, the favorite and battle team toggles,
//! and user lookups.

pub mod retry;
pub mod roster;
pub mod species;
pub mod user;
