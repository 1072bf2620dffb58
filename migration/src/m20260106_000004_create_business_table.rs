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
                    .table(Business::Table)
                    .if_not_exists()
                    .col(pk_auto(Business::Id))
                    .col(integer(Business::OwnerId))
                    .col(string(Business::Name))
                    .col(string_len(Business::Category, 100))
                    .col(text(Business::Description))
                    .col(string_len(Business::Phone, 50).default(""))
                    .col(string(Business::Email).default(""))
                    .col(text(Business::Address).default(""))
                    .col(double(Business::Rating).default(0.0))
                    .col(timestamp_with_time_zone(Business::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_business_owner_id")
                            .from(Business::Table, Business::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_business_owner_id")
                    .table(Business::Table)
                    .col(Business::OwnerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Business::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Business {
    Table,
    Id,
    OwnerId,
    Name,
    Category,
    Description,
    Phone,
    Email,
    Address,
    Rating,
    CreatedAt,
}
