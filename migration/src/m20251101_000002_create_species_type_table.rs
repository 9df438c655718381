use sea_orm_migration::{prelude::*, schema::*};

/// Type labels as displayed to users, matching the capitalized catalog type names.
const SPECIES_TYPE_LABELS: [&str; 18] = [
    "Normal", "Fire", "Water", "Grass", "Electric", "Ice", "Fighting", "Poison", "Ground",
    "Flying", "Psychic", "Bug", "Rock", "Ghost", "Dragon", "Dark", "Steel", "Fairy",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SpeciesType::Table)
                    .if_not_exists()
                    .col(pk_auto(SpeciesType::Id))
                    .col(string_uniq(SpeciesType::Label))
                    .to_owned(),
            )
            .await?;

        let mut seed = Query::insert();
        seed.into_table(SpeciesType::Table)
            .columns([SpeciesType::Label]);
        for label in SPECIES_TYPE_LABELS {
            seed.values_panic([label.into()]);
        }

        manager.exec_stmt(seed).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SpeciesType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SpeciesType {
    Table,
    Id,
    Label,
}
