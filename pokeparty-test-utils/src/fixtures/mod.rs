//! Test fixture modules for database and HTTP mock creation.
//!
//! - `catalog` - Species catalog payloads and mock endpoints
//! - `roster` - Species type seeding and roster entry records
//! - `user` - User account records

pub mod catalog;
pub mod roster;
pub mod user;
