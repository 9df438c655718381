//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same queries run
//! against a plain connection or inside a transaction.

pub mod roster;
pub mod species_type;
pub mod user;
