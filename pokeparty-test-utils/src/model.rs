//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main pokeparty crate to keep fixture signatures
//! consistent across tests.

/// Type alias for the user account database model.
pub type UserModel = entity::app_user::Model;

/// Type alias for the species type reference model.
pub type SpeciesTypeModel = entity::species_type::Model;

/// Type alias for the roster entry database model.
pub type RosterEntryModel = entity::roster_entry::Model;
