use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000005_create_event_table::Event;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::EventId))
                    .col(string(Booking::Name))
                    .col(string(Booking::Email))
                    .col(string_len(Booking::Phone, 50).default(""))
                    .col(integer(Booking::Tickets).default(1))
                    .col(text(Booking::Notes).default(""))
                    .col(string_len(Booking::Status, 16).default("pending"))
                    .col(timestamp_with_time_zone(Booking::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_event_id")
                            .from(Booking::Table, Booking::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_event_id")
                    .table(Booking::Table)
                    .col(Booking::EventId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    EventId,
    Name,
    Email,
    Phone,
    Tickets,
    Notes,
    Status,
    CreatedAt,
}
