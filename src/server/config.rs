use std::{net::SocketAddr, str::FromStr, time::Duration};

use rand::{rngs::OsRng, TryRngCore};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_TTL_HOURS: i64 = 24;
const DEFAULT_BCRYPT_COST: u32 = 12;
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 3600;

/// Minimum HS256 key length in bytes.
pub const MIN_SECRET_LEN: usize = 32;

pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,

    /// Signing secret from `JWT_SECRET`; `None` means one is generated at startup.
    pub jwt_secret: Option<Vec<u8>>,
    pub session_ttl: chrono::Duration,
    pub bcrypt_cost: u32,
    pub sweep_interval: Duration,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first so a `.env` file is honoured.
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present and valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds configuration from `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let mut bind_addr: SocketAddr =
            parse_var(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR.parse().ok())?;
        if let Some(port) = optional_var::<u16>(&lookup, "PORT")? {
            bind_addr.set_port(port);
        }

        let jwt_secret = match lookup("JWT_SECRET") {
            Some(secret) => {
                if secret.len() < MIN_SECRET_LEN {
                    return Err(ConfigError::SecretTooShort {
                        min: MIN_SECRET_LEN,
                        actual: secret.len(),
                    });
                }
                Some(secret.into_bytes())
            }
            None => None,
        };

        let ttl_hours: i64 =
            parse_var(&lookup, "SESSION_TTL_HOURS", Some(DEFAULT_SESSION_TTL_HOURS))?;
        if ttl_hours <= 0 {
            return Err(invalid("SESSION_TTL_HOURS", "must be a positive number of hours"));
        }

        let bcrypt_cost: u32 = parse_var(&lookup, "BCRYPT_COST", Some(DEFAULT_BCRYPT_COST))?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(invalid("BCRYPT_COST", "must be between 4 and 31"));
        }

        let sweep_secs: u64 = parse_var(
            &lookup,
            "SESSION_SWEEP_INTERVAL_SECS",
            Some(DEFAULT_SWEEP_INTERVAL_SECS),
        )?;
        if sweep_secs == 0 {
            return Err(invalid("SESSION_SWEEP_INTERVAL_SECS", "must be greater than zero"));
        }

        Ok(Self {
            database_url,
            bind_addr,
            jwt_secret,
            session_ttl: chrono::Duration::hours(ttl_hours),
            bcrypt_cost,
            sweep_interval: Duration::from_secs(sweep_secs),
        })
    }

    /// Returns the configured signing secret or generates a fresh one.
    ///
    /// A generated secret lives only as long as the process, so every session issued with it
    /// becomes unverifiable after a restart.
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - Secret of at least `MIN_SECRET_LEN` bytes
    /// - `Err(ConfigError::SecretGeneration)` - The OS RNG failed
    pub fn signing_secret(&self) -> Result<Vec<u8>, ConfigError> {
        match &self.jwt_secret {
            Some(secret) => Ok(secret.clone()),
            None => generate_secret(),
        }
    }
}

/// Draws a `MIN_SECRET_LEN`-byte secret from the operating system RNG.
pub fn generate_secret() -> Result<Vec<u8>, ConfigError> {
    let mut secret = vec![0u8; MIN_SECRET_LEN];
    OsRng
        .try_fill_bytes(&mut secret)
        .map_err(|e| ConfigError::SecretGeneration(e.to_string()))?;

    Ok(secret)
}

fn invalid(name: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: reason.into(),
    }
}

fn optional_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| invalid(name, e.to_string())),
        None => Ok(None),
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: Option<T>,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional_var(lookup, name)? {
        Some(value) => Ok(value),
        None => default.ok_or_else(|| ConfigError::MissingEnvVar(name.to_string())),
    }
}
