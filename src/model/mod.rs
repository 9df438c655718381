//! API data transfer objects shared by the HTTP layer and its consumers.

pub mod api;
pub mod roster;
pub mod species;
pub mod user;
