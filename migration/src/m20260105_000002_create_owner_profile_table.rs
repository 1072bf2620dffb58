use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OwnerProfile::Table)
                    .if_not_exists()
                    .col(integer(OwnerProfile::UserId).primary_key())
                    .col(string_null(OwnerProfile::Company))
                    .col(string_null(OwnerProfile::Phone))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_owner_profile_user_id")
                            .from(OwnerProfile::Table, OwnerProfile::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OwnerProfile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OwnerProfile {
    Table,
    UserId,
    Company,
    Phone,
}
