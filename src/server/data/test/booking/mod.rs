use crate::{
    model::booking::BookingStatus,
    server::{data::booking::BookingRepository, model::booking::CreateBookingParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_for_event_owner;
mod update_status;
