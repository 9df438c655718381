//! Utility functions for controller request handling.
//!
//! Session helpers resolving the authenticated user for protected endpoints.

pub mod session;
