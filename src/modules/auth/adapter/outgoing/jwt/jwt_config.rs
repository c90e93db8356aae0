use crate::shared::config::{ConfigError, EnvSource};

/// HS256 needs a key of at least 32 bytes.
const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    pub fn from_source<F>(env: &EnvSource<F>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = env.required("JWT_SECRET")?;

        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET".to_string(),
                reason: format!("must be at least {MIN_SECRET_LEN} characters long"),
            });
        }

        let token_expiry = env.parse_or("JWT_EXPIRY", 86_400i64)?;

        if token_expiry <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_EXPIRY".to_string(),
                reason: "must be a positive number of seconds".to_string(),
            });
        }

        let issuer = env
            .optional("JWT_ISSUER")
            .unwrap_or_else(|| "address-book".to_string());

        Ok(Self {
            secret_key,
            issuer,
            token_expiry,
        })
    }
}
