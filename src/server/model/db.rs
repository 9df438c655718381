//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models used throughout the application, so
//! signatures don't need to reach into the generated `entity` crate directly.

/// Type alias for the user account database model.
///
/// # Fields (from `entity::app_user::Model`)
/// - `id` - Primary key, unique user identifier
/// - `login` - Unique login handle
/// - `email` - Unique email address
/// - `name` - Display name
/// - `password_hash` - Credential hash managed by the authentication collaborator
/// - `is_admin` - Administrator role flag
/// - `created_at` - Timestamp when the user registered
/// - `updated_at` - Timestamp of the last credential or role change
pub type UserModel = entity::app_user::Model;

/// Type alias for the species type reference model (e.g. "Fire", "Water").
pub type SpeciesTypeModel = entity::species_type::Model;

/// Type alias for the roster entry database model.
///
/// One record per (user, species code) holding the cached display fields of the species
/// along with the user's favorite and battle team flags.
///
/// # Fields (from `entity::roster_entry::Model`)
/// - `id` - Surrogate primary key
/// - `user_id` - Foreign key to the owning user
/// - `species_type_id` - Foreign key to the species' primary type (nullable)
/// - `species_code` - Species identifier as known to the catalog, unique per user
/// - `name` - Cached species name
/// - `sprite_url` - Cached sprite URL (nullable)
/// - `is_favorite` - Favorite flag
/// - `is_team_member` - Battle team membership flag
/// - `created_at` - Timestamp of the first favorite or team action for the species
/// - `updated_at` - Timestamp of the last flag change
pub type RosterEntryModel = entity::roster_entry::Model;
