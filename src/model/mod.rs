//! Wire-level data transfer objects shared by every HTTP endpoint.
//!
//! These types define the JSON request and response bodies of the API. They carry no
//! behaviour beyond serialization; the server converts them to and from its domain models
//! at the controller boundary.

pub mod api;
pub mod booking;
pub mod business;
pub mod event;
pub mod system;
pub mod user;
