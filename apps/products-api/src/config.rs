//! Configuration for Products API

use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_list, env_parse, server::ServerConfig};
use database::postgres::PostgresConfig;
use std::time::Duration;

pub use core_config::Environment;

/// Application configuration
///
/// - `APP_ENV` (`development` | `production`, default: development)
/// - `HOST` / `PORT`, see [`ServerConfig`]
/// - `DATABASE_URL` and `DB_*`, see [`PostgresConfig`]
/// - `DB_SYNC_SCHEMA` (default: true) - create the products table on startup
/// - `CORS_ALLOWED_ORIGIN` - comma separated origins
/// - `SHUTDOWN_TIMEOUT_SECS` (default: 30)
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: PostgresConfig,
    pub sync_schema: bool,
    pub cors_allowed_origins: Vec<String>,
    pub shutdown_timeout: Duration,
}

impl FromEnv for Config {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            app: app_info!(),
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            database: PostgresConfig::from_env()?,
            sync_schema: env_parse("DB_SYNC_SCHEMA", true)?,
            cors_allowed_origins: env_list("CORS_ALLOWED_ORIGIN"),
            shutdown_timeout: Duration::from_secs(env_parse("SHUTDOWN_TIMEOUT_SECS", 30)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::postgres::StartupPolicy;

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/products")),
                ("APP_ENV", None),
                ("PORT", None),
                ("DB_SYNC_SCHEMA", None),
                ("DB_STARTUP_POLICY", None),
                ("CORS_ALLOWED_ORIGIN", None),
                ("SHUTDOWN_TIMEOUT_SECS", None),
            ],
            || {
                let config = Config::from_env().unwrap();

                assert_eq!(config.app.name, "products_api");
                assert_eq!(config.environment, Environment::Development);
                assert_eq!(config.server.port, 3000);
                assert!(config.sync_schema);
                assert!(config.cors_allowed_origins.is_empty());
                assert_eq!(config.shutdown_timeout, Duration::from_secs(30));
                assert_eq!(config.database.startup_policy, StartupPolicy::Degrade);
            },
        );
    }

    #[test]
    fn test_config_overrides() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://db/products")),
                ("APP_ENV", Some("production")),
                ("DB_SYNC_SCHEMA", Some("false")),
                ("DB_STARTUP_POLICY", Some("fail-fast")),
                ("CORS_ALLOWED_ORIGIN", Some("https://a.example, https://b.example")),
                ("SHUTDOWN_TIMEOUT_SECS", Some("5")),
            ],
            || {
                let config = Config::from_env().unwrap();

                assert!(config.environment.is_production());
                assert!(!config.sync_schema);
                assert_eq!(
                    config.cors_allowed_origins,
                    vec!["https://a.example", "https://b.example"]
                );
                assert_eq!(config.shutdown_timeout, Duration::from_secs(5));
                assert_eq!(config.database.startup_policy, StartupPolicy::FailFast);
            },
        );
    }

    #[test]
    fn test_missing_database_url_is_error() {
        temp_env::with_var_unset("DATABASE_URL", || {
            assert!(matches!(
                Config::from_env(),
                Err(ConfigError::MissingEnvVar(_))
            ));
        });
    }

    #[test]
    fn test_invalid_sync_flag_is_error() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/products")),
                ("DB_SYNC_SCHEMA", Some("sometimes")),
            ],
            || {
                assert!(matches!(
                    Config::from_env(),
                    Err(ConfigError::ParseError { .. })
                ));
            },
        );
    }
}
