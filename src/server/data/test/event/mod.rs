use crate::server::{
    data::event::EventRepository,
    model::event::{CreateEventParams, UpdateEventParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_upcoming;
mod update;
