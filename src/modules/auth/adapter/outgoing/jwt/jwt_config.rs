use std::env;

use crate::config::ConfigError;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
}

impl JwtConfig {
    /// Load JWT verification settings from environment variables.
    ///
    /// The secret must match the one the authentication service signs with.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;

        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: "must be at least 32 characters long".to_string(),
            });
        }

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "forum-api".to_string());

        Ok(Self { secret_key, issuer })
    }
}
