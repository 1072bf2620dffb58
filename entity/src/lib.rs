//! SeaORM entity models for the directory database.
//!
//! Each module mirrors one table created by the `migration` crate. Entities are only used
//! inside the server's data layer and the test utilities; the rest of the application works
//! with domain models converted at the repository boundary.

pub mod prelude;

pub mod booking;
pub mod business;
pub mod event;
pub mod owner_profile;
pub mod session;
pub mod user;
