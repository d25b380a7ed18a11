//! Declarative request validation.
//!
//! A route declares a list of [`FieldChain`]s. All chains run against the
//! request's path parameters and JSON body; the gate then either lets the
//! request through or rejects it with a single 400 listing every failure:
//!
//! ```json
//! { "errors": [ { "type": "field", "value": "abc", "msg": "Id must be numeric",
//!                 "param": "id", "location": "params" } ] }
//! ```
//!
//! Handlers normally get this through the
//! [`ValidatedRequest`](crate::extractors::ValidatedRequest) extractor.

mod chain;
pub mod checks;
mod gate;
mod input;

pub use chain::{Check, FieldChain, Location, Predicate};
pub use gate::{FieldError, ValidationErrors, gate, run_chains, validate};
pub use input::RequestInput;
