//! Directory Test Utils
//!
//! Shared testing utilities for the directory server. This crate offers a builder for creating
//! test contexts backed by in-memory SQLite databases and factories for inserting users,
//! sessions, businesses, events and bookings with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories for seeding test data
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_session_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_auth_tables().build().await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
