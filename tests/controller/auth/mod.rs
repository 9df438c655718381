//! Tests for authentication controller endpoints.
//!
//! Covers logout and retrieval of the authenticated user's information.
