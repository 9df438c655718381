//! Tests for the species listing endpoint.
