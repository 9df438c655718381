//! Favorite and battle team toggles.
//!
//! Both toggles share the lazy upsert flow: an entry the user never touched is synthesized
//! from catalog data and only persisted together with the toggled flag. The battle team
//! toggle additionally enforces [`MAX_TEAM_SIZE`] active members per user.
//!
//! Catalog lookups happen before the transaction opens. Inside the transaction the user's
//! row is locked, the entry re-read and, for additions, the team re-counted, so concurrent
//! toggles for one user are serialized and never push the team past its limit.

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    model::roster::RosterEntryDto,
    server::{
        catalog::{CatalogClient, CatalogSpecies},
        data::{
            roster::RosterRepository, species_type::SpeciesTypeRepository, user::UserRepository,
        },
        error::{auth::AuthError, roster::RosterError, Error},
        model::roster::{
            RosterEntry, TeamStatus, ToggleAction, ToggleOutcome, MAX_TEAM_SIZE,
        },
        service::species::SpeciesService,
    },
};

/// Where the entry targeted by a toggle comes from, resolved before the transaction opens.
enum EntrySource {
    /// The user already holds an entry under this canonical code
    Stored(String),
    /// The user never touched the species, along with its resolved species type ID
    Catalog(CatalogSpecies, Option<i32>),
}

impl EntrySource {
    fn species_code(&self) -> &str {
        match self {
            Self::Stored(species_code) => species_code,
            Self::Catalog(species, _) => &species.code,
        }
    }
}

pub struct RosterService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a CatalogClient,
}

impl<'a> RosterService<'a> {
    /// Creates a new instance of [`RosterService`]
    pub fn new(db: &'a DatabaseConnection, catalog: &'a CatalogClient) -> Self {
        Self { db, catalog }
    }

    /// Add a species to or remove it from the user's battle team
    ///
    /// A member is removed; a non-member is added unless the user already has
    /// [`MAX_TEAM_SIZE`] active members. A species the user never touched is created as a
    /// roster entry only when it is actually added.
    ///
    /// # Arguments
    /// - `user_id`: ID of the authenticated user
    /// - `species_code`: Catalog ID or name of the species
    ///
    /// # Returns
    /// - `Ok(ToggleOutcome)`: Whether the species was added or removed and its new flag
    /// - `Err(Error::RosterError(RosterError::MissingSpeciesCode))`: Blank species code
    /// - `Err(Error::RosterError(RosterError::SpeciesNotFound(_)))`: No entry exists and the
    ///   catalog could not resolve the species
    /// - `Err(Error::RosterError(RosterError::TeamFull { .. }))`: Adding would exceed the team
    ///   limit, nothing was persisted
    /// - `Err(Error::AuthError(AuthError::UserNotInDatabase(_)))`: User does not exist
    /// - `Err(Error::DbErr(_))`: Storage failure, the transaction was rolled back
    pub async fn toggle_team(
        &self,
        user_id: i32,
        species_code: &str,
    ) -> Result<ToggleOutcome, Error> {
        let species_code = normalize_species_code(species_code)?;
        let source = self.resolve_source(user_id, &species_code).await?;

        let txn = self.db.begin().await?;
        let mut entry = load_entry_locked(&txn, user_id, &source).await?;

        let action = entry.team.toggle_action();
        if action == ToggleAction::Added {
            let members = RosterRepository::new(&txn)
                .count_team_members(user_id)
                .await?;

            // Dropping the transaction rolls it back, nothing of the rejected add persists
            if members >= MAX_TEAM_SIZE {
                return Err(RosterError::TeamFull {
                    user_id,
                    species_code: entry.species_code,
                    current_flag: entry.team.is_member(),
                }
                .into());
            }
        }

        entry.team = TeamStatus::after(action);

        let saved = RosterRepository::new(&txn).upsert_entry(&entry).await?;
        txn.commit().await?;

        tracing::debug!(
            "Species {} {} battle team of user ID {}",
            saved.species_code,
            action,
            user_id
        );

        Ok(ToggleOutcome {
            species_code: saved.species_code,
            name: saved.name,
            action,
            flag: saved.is_team_member,
        })
    }

    /// Mark a species as favorite or remove the mark
    ///
    /// Same lazy creation as [`Self::toggle_team`] without any capacity constraint.
    ///
    /// # Returns
    /// - `Ok(ToggleOutcome)`: Whether the species was added to or removed from favorites
    /// - `Err(Error::RosterError(_))`: Blank species code or unknown species
    /// - `Err(Error::AuthError(AuthError::UserNotInDatabase(_)))`: User does not exist
    /// - `Err(Error::DbErr(_))`: Storage failure, the transaction was rolled back
    pub async fn toggle_favorite(
        &self,
        user_id: i32,
        species_code: &str,
    ) -> Result<ToggleOutcome, Error> {
        let species_code = normalize_species_code(species_code)?;
        let source = self.resolve_source(user_id, &species_code).await?;

        let txn = self.db.begin().await?;
        let mut entry = load_entry_locked(&txn, user_id, &source).await?;

        let action = ToggleAction::flipping(entry.is_favorite);
        entry.is_favorite = action == ToggleAction::Added;

        let saved = RosterRepository::new(&txn).upsert_entry(&entry).await?;
        txn.commit().await?;

        tracing::debug!(
            "Species {} {} favorites of user ID {}",
            saved.species_code,
            action,
            user_id
        );

        Ok(ToggleOutcome {
            species_code: saved.species_code,
            name: saved.name,
            action,
            flag: saved.is_favorite,
        })
    }

    /// List all roster entries of a user ordered by species code
    pub async fn list_roster(&self, user_id: i32) -> Result<Vec<RosterEntryDto>, Error> {
        let entries = RosterRepository::new(self.db)
            .get_all_with_types(user_id)
            .await?;

        Ok(entries
            .into_iter()
            .map(|(entry, species_type)| RosterEntryDto {
                species_code: entry.species_code,
                name: entry.name,
                sprite_url: entry.sprite_url,
                species_type: species_type.map(|t| t.label),
                is_favorite: entry.is_favorite,
                is_team_member: entry.is_team_member,
                updated_at: entry.updated_at,
            })
            .collect())
    }

    /// Find the stored entry for the requested code, or fetch the species from the catalog
    async fn resolve_source(&self, user_id: i32, species_code: &str) -> Result<EntrySource, Error> {
        if let Some(entry) = RosterRepository::new(self.db)
            .find_entry(user_id, species_code)
            .await?
        {
            return Ok(EntrySource::Stored(entry.species_code));
        }

        let Some(species) = SpeciesService::new(self.db, self.catalog)
            .fetch_species(species_code)
            .await
        else {
            return Err(RosterError::SpeciesNotFound(species_code.to_string()).into());
        };

        let species_type_id = match species.primary_type_label() {
            Some(label) => SpeciesTypeRepository::new(self.db)
                .find_by_label(&label)
                .await?
                .map(|species_type| species_type.id),
            None => None,
        };

        Ok(EntrySource::Catalog(species, species_type_id))
    }
}

/// Lock the user's row and load the targeted entry, synthesizing it from catalog data when
/// the user holds none
async fn load_entry_locked(
    txn: &DatabaseTransaction,
    user_id: i32,
    source: &EntrySource,
) -> Result<RosterEntry, Error> {
    if UserRepository::new(txn).lock_by_id(user_id).await?.is_none() {
        return Err(AuthError::UserNotInDatabase(user_id).into());
    }

    let stored = RosterRepository::new(txn)
        .find_entry(user_id, source.species_code())
        .await?;

    match (stored, source) {
        (Some(entry), _) => Ok(RosterEntry::from(entry)),
        (None, EntrySource::Catalog(species, species_type_id)) => Ok(RosterEntry::from_species(
            user_id,
            species,
            *species_type_id,
        )),
        (None, EntrySource::Stored(species_code)) => Err(Error::InternalError(format!(
            "Roster entry for species {} of user ID {} disappeared during toggle",
            species_code, user_id
        ))),
    }
}

/// Trim and lowercase a requested species code
///
/// Codes that cannot name a catalog species (anything besides ASCII letters, digits and
/// `-`) are rejected as not found without querying the catalog.
fn normalize_species_code(species_code: &str) -> Result<String, RosterError> {
    let trimmed = species_code.trim();
    if trimmed.is_empty() {
        return Err(RosterError::MissingSpeciesCode);
    }

    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(RosterError::SpeciesNotFound(trimmed.to_string()));
    }

    Ok(trimmed.to_ascii_lowercase())
}
