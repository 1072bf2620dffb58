//! Password hashing service.
//!
//! Wraps bcrypt with a configurable cost. Hashing and verification are CPU-bound, so both
//! run on tokio's blocking thread pool rather than a request task.

use crate::server::error::AppError;

/// bcrypt only reads the first 72 bytes of its input.
pub const MAX_PASSWORD_BYTES: usize = 72;

#[derive(Clone, Copy, Debug)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    /// Creates a password service hashing at the given bcrypt cost (4..=31).
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Produces a salted bcrypt digest of `password`.
    ///
    /// # Returns
    /// - `Ok(String)` - Digest in modular crypt format
    /// - `Err(AppError::PasswordErr)` - bcrypt rejected the input or cost
    /// - `Err(AppError::JoinErr)` - The blocking task failed
    pub async fn hash(&self, password: &str) -> Result<String, AppError> {
        let password = password.to_owned();
        let cost = self.cost;

        let digest = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;

        Ok(digest)
    }

    /// Checks `password` against a stored digest.
    ///
    /// Fails closed: a malformed digest or a failed blocking task yields `false`.
    pub async fn verify(&self, password: &str, digest: &str) -> bool {
        let password = password.to_owned();
        let digest = digest.to_owned();

        match tokio::task::spawn_blocking(move || bcrypt::verify(password, &digest)).await {
            Ok(Ok(matches)) => matches,
            Ok(Err(e)) => {
                tracing::debug!("Password verification failed on stored digest: {}", e);
                false
            }
            Err(e) => {
                tracing::error!("Password verification task failed: {}", e);
                false
            }
        }
    }
}
