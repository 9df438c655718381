use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::roster::RosterEntry;

pub struct RosterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RosterRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Find the roster entry a user holds for a species code
    pub async fn find_entry(
        &self,
        user_id: i32,
        species_code: &str,
    ) -> Result<Option<entity::roster_entry::Model>, DbErr> {
        entity::prelude::RosterEntry::find()
            .filter(entity::roster_entry::Column::UserId.eq(user_id))
            .filter(entity::roster_entry::Column::SpeciesCode.eq(species_code))
            .one(self.db)
            .await
    }

    /// Count the active battle team members of a user
    pub async fn count_team_members(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::RosterEntry::find()
            .filter(entity::roster_entry::Column::UserId.eq(user_id))
            .filter(entity::roster_entry::Column::IsTeamMember.eq(true))
            .count(self.db)
            .await
    }

    /// Insert a roster entry or update the existing entry for the same (user, species code)
    ///
    /// On conflict the cached display fields, both flags and `updated_at` are overwritten
    /// while `created_at` keeps the timestamp of the first insert.
    pub async fn upsert_entry(
        &self,
        entry: &RosterEntry,
    ) -> Result<entity::roster_entry::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let entry = entity::roster_entry::ActiveModel {
            user_id: ActiveValue::Set(entry.user_id),
            species_type_id: ActiveValue::Set(entry.species_type_id),
            species_code: ActiveValue::Set(entry.species_code.clone()),
            name: ActiveValue::Set(entry.name.clone()),
            sprite_url: ActiveValue::Set(entry.sprite_url.clone()),
            is_favorite: ActiveValue::Set(entry.is_favorite),
            is_team_member: ActiveValue::Set(entry.team.is_member()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::RosterEntry::insert(entry)
            .on_conflict(
                OnConflict::columns([
                    entity::roster_entry::Column::UserId,
                    entity::roster_entry::Column::SpeciesCode,
                ])
                .update_columns([
                    entity::roster_entry::Column::SpeciesTypeId,
                    entity::roster_entry::Column::Name,
                    entity::roster_entry::Column::SpriteUrl,
                    entity::roster_entry::Column::IsFavorite,
                    entity::roster_entry::Column::IsTeamMember,
                    entity::roster_entry::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Get the entries a user holds for any of the provided species codes
    pub async fn find_many_by_codes(
        &self,
        user_id: i32,
        species_codes: &[String],
    ) -> Result<Vec<entity::roster_entry::Model>, DbErr> {
        if species_codes.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::RosterEntry::find()
            .filter(entity::roster_entry::Column::UserId.eq(user_id))
            .filter(entity::roster_entry::Column::SpeciesCode.is_in(species_codes.iter().cloned()))
            .all(self.db)
            .await
    }

    /// Get all entries of a user along with their species type, ordered by species code
    pub async fn get_all_with_types(
        &self,
        user_id: i32,
    ) -> Result<
        Vec<(
            entity::roster_entry::Model,
            Option<entity::species_type::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::RosterEntry::find()
            .find_also_related(entity::species_type::Entity)
            .filter(entity::roster_entry::Column::UserId.eq(user_id))
            .order_by_asc(entity::roster_entry::Column::SpeciesCode)
            .order_by_asc(entity::roster_entry::Column::Id)
            .all(self.db)
            .await
    }
}
