//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): PostgreSQL connection string
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `DATABASE_MAX_CONNECTIONS` (optional): pool size, defaults to 5
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_max_connections")]
    pub database_max_connections: u32,
}

fn default_port() -> u16 {
    3000
}

fn default_max_connections() -> u32 {
    5
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is read first when present.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required environment variables are missing (e.g., DATABASE_URL)
    /// - Environment variable values cannot be parsed into expected types
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Build a config from explicit key/value pairs.
    ///
    /// Keys use the environment form (`DATABASE_URL`, `SERVER_PORT`).
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_optional_vars_missing() {
        let config = Config::from_vars(vars(&[("DATABASE_URL", "postgres://localhost/ledger")]))
            .unwrap();
        assert_eq!(config.database_url, "postgres://localhost/ledger");
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.database_max_connections, 5);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = Config::from_vars(vars(&[
            ("DATABASE_URL", "postgres://db/ledger"),
            ("SERVER_PORT", "8080"),
            ("DATABASE_MAX_CONNECTIONS", "20"),
        ]))
        .unwrap();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.database_max_connections, 20);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        assert!(Config::from_vars(vars(&[("SERVER_PORT", "8080")])).is_err());
    }
}
