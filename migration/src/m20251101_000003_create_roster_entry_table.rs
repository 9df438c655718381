use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_create_app_user_table::AppUser,
    m20251101_000002_create_species_type_table::SpeciesType,
};

static IDX_ROSTER_ENTRY_USER_SPECIES: &str = "idx_roster_entry_user_id_species_code";
static IDX_ROSTER_ENTRY_USER_TEAM: &str = "idx_roster_entry_user_id_is_team_member";
static FK_ROSTER_ENTRY_USER_ID: &str = "fk_roster_entry_user_id";
static FK_ROSTER_ENTRY_SPECIES_TYPE_ID: &str = "fk_roster_entry_species_type_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RosterEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(RosterEntry::Id))
                    .col(integer(RosterEntry::UserId))
                    .col(integer_null(RosterEntry::SpeciesTypeId))
                    .col(string_len(RosterEntry::SpeciesCode, 10))
                    .col(string(RosterEntry::Name))
                    .col(string_null(RosterEntry::SpriteUrl))
                    .col(boolean(RosterEntry::IsFavorite).default(false))
                    .col(boolean(RosterEntry::IsTeamMember).default(false))
                    .col(timestamp(RosterEntry::CreatedAt))
                    .col(timestamp(RosterEntry::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Backs the upsert; at most one entry per (user, species)
        manager
            .create_index(
                Index::create()
                    .name(IDX_ROSTER_ENTRY_USER_SPECIES)
                    .table(RosterEntry::Table)
                    .col(RosterEntry::UserId)
                    .col(RosterEntry::SpeciesCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ROSTER_ENTRY_USER_TEAM)
                    .table(RosterEntry::Table)
                    .col(RosterEntry::UserId)
                    .col(RosterEntry::IsTeamMember)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ROSTER_ENTRY_USER_ID)
                    .from_tbl(RosterEntry::Table)
                    .from_col(RosterEntry::UserId)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ROSTER_ENTRY_SPECIES_TYPE_ID)
                    .from_tbl(RosterEntry::Table)
                    .from_col(RosterEntry::SpeciesTypeId)
                    .to_tbl(SpeciesType::Table)
                    .to_col(SpeciesType::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ROSTER_ENTRY_SPECIES_TYPE_ID)
                    .table(RosterEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ROSTER_ENTRY_USER_ID)
                    .table(RosterEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ROSTER_ENTRY_USER_TEAM)
                    .table(RosterEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ROSTER_ENTRY_USER_SPECIES)
                    .table(RosterEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RosterEntry::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum RosterEntry {
    Table,
    Id,
    UserId,
    SpeciesTypeId,
    SpeciesCode,
    Name,
    SpriteUrl,
    IsFavorite,
    IsTeamMember,
    CreatedAt,
    UpdatedAt,
}
