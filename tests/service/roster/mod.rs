//! Tests for the favorite & battle team toggles.
//!
//! Covers the battle team limit, lazy entry creation, toggle symmetry and concurrent
//! additions for the same user.

mod toggle_favorite;
mod toggle_team;
