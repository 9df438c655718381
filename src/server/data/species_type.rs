use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct SpeciesTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SpeciesTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Find a species type by its label (e.g. "Fire")
    ///
    /// Types are seeded by migration and never created by the application.
    pub async fn find_by_label(
        &self,
        label: &str,
    ) -> Result<Option<entity::species_type::Model>, DbErr> {
        entity::prelude::SpeciesType::find()
            .filter(entity::species_type::Column::Label.eq(label))
            .one(self.db)
            .await
    }
}
