use crate::server::{
    data::business::BusinessRepository,
    model::business::{CreateBusinessParams, UpdateBusinessParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_owner;
mod update;

fn create_params(owner_id: i32, name: &str) -> CreateBusinessParams {
    CreateBusinessParams {
        owner_id,
        name: name.to_string(),
        category: "Cafe".to_string(),
        description: "Coffee and pastries".to_string(),
        phone: "555-0101".to_string(),
        email: "hello@example.com".to_string(),
        address: "1 Main St".to_string(),
        rating: 4.5,
    }
}
