//! Session token signing and verification.
//!
//! Tokens are HS256 JWTs. The header algorithm is checked explicitly before any
//! signature work, so a token claiming `none` or another algorithm is rejected outright.

use chrono::{DateTime, SubsecRound, Utc};
use jsonwebtoken::{
    decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, AppError},
        model::user::User,
    },
};

const JTI_LENGTH: usize = 16;

/// Claims carried by every session token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub user_id: i32,
    pub email: String,
    pub role: Role,
    /// Expiry, unix seconds.
    pub exp: i64,
    /// Issue time, unix seconds.
    pub iat: i64,
    /// Random nonce; keeps tokens minted in the same second distinct.
    pub jti: String,
}

/// Holds the process-wide signing keys.
///
/// Built once at startup from the configured or generated secret and shared read-only
/// through `AppState`.
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: chrono::Duration,
}

impl TokenSigner {
    /// # Arguments
    /// - `secret` - HMAC secret shared by signing and verification
    /// - `ttl` - Lifetime stamped into the `exp` claim
    pub fn new(secret: &[u8], ttl: chrono::Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Signs a token for `user` issued at `issued_at`.
    ///
    /// `issued_at` is truncated to whole seconds so the returned expiry equals the `exp`
    /// claim exactly.
    ///
    /// # Returns
    /// - `Ok((token, expires_at))` - Signed token and its expiry
    /// - `Err(AppError::TokenErr)` - Encoding failed
    pub fn sign(
        &self,
        user: &User,
        issued_at: DateTime<Utc>,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let issued_at = issued_at.trunc_subsecs(0);
        let expires_at = issued_at + self.ttl;
        let claims = SessionClaims {
            user_id: user.id,
            email: user.email.clone(),
            role: user.role,
            exp: expires_at.timestamp(),
            iat: issued_at.timestamp(),
            jti: generate_jti(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;

        Ok((token, expires_at))
    }

    /// Verifies algorithm, signature and expiry, returning the claims.
    ///
    /// Expiry is checked with zero leeway.
    ///
    /// # Returns
    /// - `Ok(SessionClaims)` - Token is authentic and unexpired
    /// - `Err(AuthError::AlgorithmMismatch)` - Header names an algorithm other than HS256
    /// - `Err(AuthError::InvalidToken)` - Malformed, badly signed or expired token
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let header = decode_header(token).map_err(|e| AuthError::InvalidToken(e.to_string()))?;
        if header.alg != Algorithm::HS256 {
            return Err(AuthError::AlgorithmMismatch(format!("{:?}", header.alg)));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        decode::<SessionClaims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}

fn generate_jti() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..JTI_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
