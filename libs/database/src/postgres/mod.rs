//! PostgreSQL connector and utilities
//!
//! Connection management with retry and a startup policy, plus a health probe.

mod config;
mod connector;
mod health;

pub use config::{PostgresConfig, StartupPolicy};
pub use connector::{connect_from_config, connect_lazy, connect_with_options, connect_with_policy};
pub use health::check_health;

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
