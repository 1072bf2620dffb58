//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the fields they
//! care about. Each entity has a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let owner = factory::user::UserFactory::new(&db)
//!     .role("business_owner")
//!     .build()
//!     .await?;
//! let business = factory::create_business(&db, owner.id).await?;
//! let event = factory::create_event(&db, owner.id).await?;
//! let booking = factory::create_booking(&db, event.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Users with a role and password digest
//! - `session` - Session rows with a configurable expiry
//! - `business` - Businesses owned by a user
//! - `event` - Events owned by a user, optionally linked to a business
//! - `booking` - Bookings against an event
//! - `helpers` - Unique id generation

pub mod booking;
pub mod business;
pub mod event;
pub mod helpers;
pub mod session;
pub mod user;

pub use booking::create_booking;
pub use business::create_business;
pub use event::create_event;
pub use session::create_session;
pub use user::{create_user, create_user_with_role};
