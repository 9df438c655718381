//! Tests for service layer operations.

mod roster;
