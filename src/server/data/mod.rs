//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models (or raw entities where conversion can fail) to the service layer. All
//! database queries, inserts, updates, and deletes are performed through these repositories.

pub mod booking;
pub mod business;
pub mod event;
pub mod session;
pub mod user;

#[cfg(test)]
mod test;
