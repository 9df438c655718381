use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::{
    constant::SPECIES_TYPE_LABELS,
    error::TestError,
    model::{RosterEntryModel, SpeciesTypeModel},
    TestContext,
};

impl TestContext {
    pub fn roster<'a>(&'a mut self) -> RosterFixtures<'a> {
        RosterFixtures { context: self }
    }
}

pub struct RosterFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> RosterFixtures<'a> {
    /// Seed the species type reference table
    pub async fn insert_species_types(&self) -> Result<Vec<SpeciesTypeModel>, TestError> {
        let types = SPECIES_TYPE_LABELS
            .iter()
            .map(|label| entity::species_type::ActiveModel {
                label: ActiveValue::Set(label.to_string()),
                ..Default::default()
            });

        Ok(entity::prelude::SpeciesType::insert_many(types)
            .exec_with_returning(&self.context.db)
            .await?)
    }

    /// Insert a roster entry named after its species code
    pub async fn insert_entry(
        &self,
        user_id: i32,
        species_code: &str,
        is_favorite: bool,
        is_team_member: bool,
    ) -> Result<RosterEntryModel, TestError> {
        self.insert(user_id, species_code, None, is_favorite, is_team_member)
            .await
    }

    /// Insert a favorite roster entry linked to the species type with the provided label
    pub async fn insert_typed_entry(
        &self,
        user_id: i32,
        species_code: &str,
        type_label: &str,
    ) -> Result<RosterEntryModel, TestError> {
        let species_type = entity::prelude::SpeciesType::find()
            .filter(entity::species_type::Column::Label.eq(type_label))
            .one(&self.context.db)
            .await?;

        self.insert(
            user_id,
            species_code,
            species_type.map(|t| t.id),
            true,
            false,
        )
        .await
    }

    /// Insert an active battle team member for each species code
    pub async fn insert_team(
        &self,
        user_id: i32,
        species_codes: &[&str],
    ) -> Result<Vec<RosterEntryModel>, TestError> {
        let mut members = Vec::new();
        for species_code in species_codes {
            members.push(self.insert_entry(user_id, species_code, false, true).await?);
        }

        Ok(members)
    }

    /// Count all roster entries of a user
    pub async fn count_entries(&self, user_id: i32) -> Result<u64, TestError> {
        Ok(entity::prelude::RosterEntry::find()
            .filter(entity::roster_entry::Column::UserId.eq(user_id))
            .count(&self.context.db)
            .await?)
    }

    /// Count active battle team members of a user
    pub async fn count_team_members(&self, user_id: i32) -> Result<u64, TestError> {
        Ok(entity::prelude::RosterEntry::find()
            .filter(entity::roster_entry::Column::UserId.eq(user_id))
            .filter(entity::roster_entry::Column::IsTeamMember.eq(true))
            .count(&self.context.db)
            .await?)
    }

    /// Get the entry a user holds for a species code
    pub async fn get_entry(
        &self,
        user_id: i32,
        species_code: &str,
    ) -> Result<Option<RosterEntryModel>, TestError> {
        Ok(entity::prelude::RosterEntry::find()
            .filter(entity::roster_entry::Column::UserId.eq(user_id))
            .filter(entity::roster_entry::Column::SpeciesCode.eq(species_code))
            .one(&self.context.db)
            .await?)
    }

    async fn insert(
        &self,
        user_id: i32,
        species_code: &str,
        species_type_id: Option<i32>,
        is_favorite: bool,
        is_team_member: bool,
    ) -> Result<RosterEntryModel, TestError> {
        insert_roster_entry(
            &self.context.db,
            user_id,
            species_code,
            species_type_id,
            is_favorite,
            is_team_member,
        )
        .await
    }
}

/// Insert a roster entry named after its species code on any connection
pub(crate) async fn insert_roster_entry<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    species_code: &str,
    species_type_id: Option<i32>,
    is_favorite: bool,
    is_team_member: bool,
) -> Result<RosterEntryModel, TestError> {
    let now = Utc::now().naive_utc();

    Ok(
        entity::prelude::RosterEntry::insert(entity::roster_entry::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            species_type_id: ActiveValue::Set(species_type_id),
            species_code: ActiveValue::Set(species_code.to_string()),
            name: ActiveValue::Set(format!("Species {}", species_code)),
            sprite_url: ActiveValue::Set(None),
            is_favorite: ActiveValue::Set(is_favorite),
            is_team_member: ActiveValue::Set(is_team_member),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(db)
        .await?,
    )
}
