//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through Axum's
//! state extraction. It holds:
//! - Database connection pool for data persistence
//! - Token signer holding the process-wide signing key and session lifetime
//! - Password service configured with the bcrypt cost
//! - Activity log backing `/stats` and `/system-events`

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::{
    activity::ActivityLog, password::PasswordService, token::TokenSigner,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<TokenSigner>` shares the key material
/// - `PasswordService` is `Copy`
/// - `ActivityLog` uses `Arc` for shared state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signs and verifies session tokens.
    ///
    /// The key is fixed for the life of the process; restarting without `JWT_SECRET`
    /// invalidates every outstanding token.
    pub tokens: Arc<TokenSigner>,

    /// Hashes and verifies account passwords.
    pub passwords: PasswordService,

    /// Request counter and recent system events.
    pub activity: ActivityLog,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token signer for session issuance and validation
    /// - `passwords` - Password hashing service
    /// - `activity` - Shared activity log
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenSigner,
        passwords: PasswordService,
        activity: ActivityLog,
    ) -> Self {
        Self {
            db,
            tokens: Arc::new(tokens),
            passwords,
            activity,
        }
    }
}
