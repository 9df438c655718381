use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppUser::Table)
                    .if_not_exists()
                    .col(pk_auto(AppUser::Id))
                    .col(string_uniq(AppUser::Login))
                    .col(string_uniq(AppUser::Email))
                    .col(string(AppUser::Name))
                    .col(string(AppUser::PasswordHash))
                    .col(boolean(AppUser::IsAdmin).default(false))
                    .col(timestamp(AppUser::CreatedAt))
                    .col(timestamp_null(AppUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AppUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AppUser {
    Table,
    Id,
    Login,
    Email,
    Name,
    PasswordHash,
    IsAdmin,
    CreatedAt,
    UpdatedAt,
}
