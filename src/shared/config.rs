use std::fmt::Display;
use std::str::FromStr;

use crate::auth::adapter::outgoing::jwt::JwtConfig;
use crate::email::adapter::outgoing::smtp_sender::SmtpConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(String),

    #[error("Invalid {key}: {reason}")]
    Invalid { key: String, reason: String },
}

/// Read-only view over configuration variables. The process environment in
/// production, a fixed map in tests.
pub struct EnvSource<F> {
    lookup: F,
}

impl EnvSource<fn(&str) -> Option<String>> {
    pub fn process() -> Self {
        fn from_process(key: &str) -> Option<String> {
            std::env::var(key).ok()
        }
        EnvSource {
            lookup: from_process,
        }
    }
}

impl<F> EnvSource<F>
where
    F: Fn(&str) -> Option<String>,
{
    pub fn new(lookup: F) -> Self {
        Self { lookup }
    }

    /// Blank values count as unset.
    pub fn optional(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    pub fn required(&self, key: &str) -> Result<String, ConfigError> {
        self.optional(key)
            .ok_or_else(|| ConfigError::Missing(key.to_string()))
    }

    pub fn parse_or<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.optional(key) {
            None => Ok(default),
            Some(raw) => raw.parse::<T>().map_err(|e| ConfigError::Invalid {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub jwt: JwtConfig,
    pub smtp: SmtpConfig,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_env_files();
        Self::from_source(&EnvSource::process())
    }

    pub fn from_source<F>(env: &EnvSource<F>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: env.optional("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: env.parse_or("PORT", 8080u16)?,
            database_url: env.required("DATABASE_URL")?,
            jwt: JwtConfig::from_source(env)?,
            smtp: SmtpConfig::from_source(env)?,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(not(tarpaulin_include))]
fn load_env_files() {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(vars: &[(&str, &str)]) -> EnvSource<impl Fn(&str) -> Option<String>> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvSource::new(move |key: &str| map.get(key).cloned())
    }

    fn full_vars() -> Vec<(&'static str, &'static str)> {
        vec![
            ("HOST", "0.0.0.0"),
            ("PORT", "9000"),
            ("DATABASE_URL", "postgres://localhost/address_book"),
            ("JWT_SECRET", "an_adequately_long_secret_for_hs256_signing"),
            ("EMAIL_FROM", "noreply@example.com"),
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_USERNAME", "mailer"),
            ("SMTP_PASSWORD", "secret"),
        ]
    }

    #[test]
    fn test_app_config_from_source() {
        let config = AppConfig::from_source(&source(&full_vars())).unwrap();

        assert_eq!(config.server_url(), "0.0.0.0:9000");
        assert_eq!(config.database_url, "postgres://localhost/address_book");
        assert_eq!(config.jwt.token_expiry, 86400);
    }

    #[test]
    fn test_app_config_defaults_host_and_port() {
        let vars: Vec<_> = full_vars()
            .into_iter()
            .filter(|(k, _)| *k != "HOST" && *k != "PORT")
            .collect();

        let config = AppConfig::from_source(&source(&vars)).unwrap();
        assert_eq!(config.server_url(), "127.0.0.1:8080");
    }

    #[test]
    fn test_app_config_missing_database_url() {
        let vars: Vec<_> = full_vars()
            .into_iter()
            .filter(|(k, _)| *k != "DATABASE_URL")
            .collect();

        let err = AppConfig::from_source(&source(&vars)).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL".to_string()));
    }

    #[test]
    fn test_invalid_port_is_reported() {
        let mut vars = full_vars();
        vars.retain(|(k, _)| *k != "PORT");
        vars.push(("PORT", "eighty"));

        let err = AppConfig::from_source(&source(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "PORT"));
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let env = source(&[("DATABASE_URL", "   ")]);
        assert_eq!(
            env.required("DATABASE_URL"),
            Err(ConfigError::Missing("DATABASE_URL".to_string()))
        );
    }
}
