//! HTTP handlers.
//!
//! Handlers authenticate through `AuthGuard`, convert DTOs into domain parameters, call a
//! service and convert the result back into a DTO. Body, path and query rejections are
//! turned into `AppError::BadRequest` so every failure shares the `{"error": ...}` shape.

pub mod auth;
pub mod booking;
pub mod business;
pub mod event;
pub mod system;

#[cfg(test)]
mod test;
