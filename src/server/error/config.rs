use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    #[error("Invalid value for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Configured signing secret is shorter than the HS256 minimum.
    #[error("JWT_SECRET must be at least {min} bytes, got {actual}")]
    SecretTooShort { min: usize, actual: usize },

    /// The operating system RNG could not produce a signing secret.
    ///
    /// There is no fallback key; startup aborts.
    #[error("Failed to generate signing secret from the OS RNG: {0}")]
    SecretGeneration(String),
}
