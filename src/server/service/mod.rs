//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Credentials & Sessions**: Password hashing, token signing and the session lifecycle
//! - **Business Logic**: Validation and ownership rules for listings and bookings
//! - **Orchestration**: Coordinating repository calls and recording system events
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod activity;
pub mod auth;
pub mod booking;
pub mod business;
pub mod event;
pub mod password;
pub mod session;
pub mod token;
