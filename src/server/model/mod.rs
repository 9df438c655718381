//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application state,
//! database model type aliases, session data structures and the roster domain types used by
//! the team membership controller.

pub mod app;
pub mod db;
pub mod roster;
pub mod session;
