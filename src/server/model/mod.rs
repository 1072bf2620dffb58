//! Domain models and operation-specific parameter types.
//!
//! Repositories convert SeaORM entities into these models at the data boundary, services
//! operate on them, and controllers convert them into DTOs for responses. Parameter types
//! carry validated input from controllers down to repositories.

pub mod activity;
pub mod booking;
pub mod business;
pub mod event;
pub mod session;
pub mod user;
