//! # Axum Helpers
//!
//! Shared web kit for the products service.
//!
//! ## Modules
//!
//! - **[`validation`]**: field check chains and the validation gate
//! - **[`extractors`]**: `ValidatedRequest`, which runs a route's rule set
//! - **[`errors`]**: `AppError`, error bodies and error codes
//! - **[`server`]**: router assembly, health checks, graceful shutdown
//! - **[`http`]**: HTTP middleware (CORS, security headers)

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;
pub mod validation;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks,
};

pub use http::{cors_layer_for, create_cors_layer, create_permissive_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{RuleSet, ValidatedRequest};

pub use validation::{FieldChain, FieldError, RequestInput, ValidationErrors};
