//! Database library providing the PostgreSQL connector used by the products service.
//!
//! # Features
//!
//! - `postgres` (default) - PostgreSQL support with SeaORM
//! - `config` - Configuration support with `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{PostgresConfig, connect_with_policy};
//!
//! let config = PostgresConfig::from_env()?;
//! let retry = config.retry_config();
//! let db = connect_with_policy(config, retry).await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
