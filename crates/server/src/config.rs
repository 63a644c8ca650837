use log::info;
use std::{env, net::SocketAddr};
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),
    #[error("environment variable {key} has invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Server settings read from the environment (and `.env` when present)
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub oidc_issuer_url: String,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            info!("Loaded environment from {}", path.display());
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr.parse().map_err(|_| ConfigError::Invalid {
            key: "BIND_ADDR",
            value: bind_addr.clone(),
        })?;

        let run_migrations = match get("RUN_MIGRATIONS").as_deref() {
            None | Some("") | Some("0") | Some("false") => false,
            Some("1") | Some("true") => true,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "RUN_MIGRATIONS",
                    value: other.to_string(),
                });
            }
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_addr,
            oidc_issuer_url: required("OIDC_ISSUER_URL")?,
            run_migrations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply() {
        let config = load(&[
            ("DATABASE_URL", "postgres://localhost/tutoring"),
            ("OIDC_ISSUER_URL", "https://issuer.example.com"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert!(!config.run_migrations);
    }

    #[test]
    fn reports_missing_and_invalid_values() {
        assert_eq!(
            load(&[("OIDC_ISSUER_URL", "https://issuer.example.com")]).unwrap_err(),
            ConfigError::Missing("DATABASE_URL")
        );

        let err = load(&[
            ("DATABASE_URL", "postgres://localhost/tutoring"),
            ("OIDC_ISSUER_URL", "https://issuer.example.com"),
            ("BIND_ADDR", "localhost"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BIND_ADDR", .. }));
    }

    #[test]
    fn parses_migration_flag() {
        let config = load(&[
            ("DATABASE_URL", "postgres://localhost/tutoring"),
            ("OIDC_ISSUER_URL", "https://issuer.example.com"),
            ("RUN_MIGRATIONS", "true"),
        ])
        .unwrap();
        assert!(config.run_migrations);
    }
}
