use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::{error, info, warn};

use super::{PostgresConfig, StartupPolicy};
use crate::common::{DatabaseError, RetryConfig, retry_with_backoff};

/// Connect using a PostgresConfig, without retrying.
pub async fn connect_from_config(config: PostgresConfig) -> Result<DatabaseConnection, DbErr> {
    connect_with_options(config.into_connect_options()).await
}

/// Connect with custom connection options
pub async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!("Successfully connected to PostgreSQL database");
    Ok(db)
}

/// Build a pool that opens connections on first use.
///
/// No I/O happens here, so this only fails on an unusable URL. Queries made
/// while the server is down fail with a connection-acquire error.
pub async fn connect_lazy(mut options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    options.connect_lazy(true);
    let db = Database::connect(options).await?;
    warn!("Using a lazily connecting PostgreSQL pool");
    Ok(db)
}

/// Connect at startup, applying the configured [`StartupPolicy`] once retries
/// are exhausted.
///
/// - `FailFast` returns [`DatabaseError::ConnectionFailed`].
/// - `Degrade` logs the failure and returns a lazy pool from [`connect_lazy`].
///
/// ```ignore
/// let config = PostgresConfig::from_env()?;
/// let retry = config.retry_config();
/// let db = connect_with_policy(config, retry).await?;
/// ```
pub async fn connect_with_policy(
    config: PostgresConfig,
    retry_config: RetryConfig,
) -> Result<DatabaseConnection, DatabaseError> {
    let policy = config.startup_policy;
    let options = config.into_connect_options();

    match retry_with_backoff(|| connect_with_options(options.clone()), retry_config).await {
        Ok(db) => Ok(db),
        Err(e) => match policy {
            StartupPolicy::FailFast => {
                error!(error = %e, %policy, "Could not connect to PostgreSQL");
                Err(DatabaseError::ConnectionFailed(e.to_string()))
            }
            StartupPolicy::Degrade => {
                error!(
                    error = %e,
                    %policy,
                    "Could not connect to PostgreSQL, continuing without a live connection"
                );
                Ok(connect_lazy(options).await?)
            }
        },
    }
}
