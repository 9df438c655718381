//! Server application core modules.
//!
//! This module contains all server-side functionality for the roster backend, including
//! HTTP routing, session handling, database access, the species catalog client, and the
//! roster services that enforce the battle team limit.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
