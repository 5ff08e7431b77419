use crate::config::{self, ConfigError};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub admin_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    pub const MIN_SECRET_LEN: usize = 32;
    pub const DEFAULT_ISSUER: &'static str = "portfolio";
    pub const DEFAULT_ADMIN_EXPIRY: i64 = 3600;

    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        config::load_env_files();

        let secret_key = config::required("JWT_SECRET")?;

        // HS256 requires at least 32 bytes
        if secret_key.len() < Self::MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: "must be at least 32 characters long for HS256".to_string(),
            });
        }

        let admin_token_expiry = config::parse_or("JWT_ADMIN_EXPIRY", Self::DEFAULT_ADMIN_EXPIRY)?;
        if admin_token_expiry <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_ADMIN_EXPIRY",
                reason: "must be a positive number of seconds".to_string(),
            });
        }

        let issuer = config::parse_or("JWT_ISSUER", Self::DEFAULT_ISSUER.to_string())?;

        Ok(Self {
            secret_key,
            issuer,
            admin_token_expiry,
        })
    }
}
