use crate::{
    model::user::Role,
    server::{data::user::UserRepository, model::user::CreateUserParam},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod find_by_email;

fn create_param(email: &str, role: Role) -> CreateUserParam {
    CreateUserParam {
        name: "Alice".to_string(),
        email: email.to_string(),
        password_hash: "$2b$04$placeholder".to_string(),
        role,
        company: Some("Acme".to_string()),
        phone: Some("555-0100".to_string()),
    }
}
