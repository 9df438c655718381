//! Pokeparty: a small authenticated backend for curating a personal Pokémon roster.
//!
//! Users mark species as favorites and assemble a battle team of at most six members,
//! with species data proxied from an external catalog.

pub mod model;
pub mod server;
