use super::{FieldError, RequestInput};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Where a validated field is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Params,
    Body,
}

pub type Predicate = fn(Option<&Value>) -> bool;

/// One step of a field chain: a predicate, the message reported when it
/// fails, and whether a failure stops the rest of the chain.
#[derive(Debug, Clone, Copy)]
pub struct Check {
    pub predicate: Predicate,
    pub message: &'static str,
    pub bail: bool,
}

/// Ordered checks for a single field.
///
/// Checks run left to right. A failing check reports its message; if it was
/// followed by [`bail`](Self::bail) the remaining checks are skipped.
///
/// ```ignore
/// use axum_helpers::validation::{FieldChain, checks};
///
/// let price = FieldChain::body("price")
///     .check(checks::not_empty, "Product price cannot be empty")
///     .bail()
///     .check(checks::is_numeric, "Invalid value")
///     .bail()
///     .check(checks::is_positive, "Invalid price");
/// ```
#[derive(Debug, Clone)]
pub struct FieldChain {
    field: &'static str,
    location: Location,
    optional: bool,
    checks: Vec<Check>,
}

impl FieldChain {
    pub fn new(location: Location, field: &'static str) -> Self {
        Self {
            field,
            location,
            optional: false,
            checks: Vec::new(),
        }
    }

    pub fn param(field: &'static str) -> Self {
        Self::new(Location::Params, field)
    }

    pub fn body(field: &'static str) -> Self {
        Self::new(Location::Body, field)
    }

    /// Skip every check when the field is absent.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn check(mut self, predicate: Predicate, message: &'static str) -> Self {
        self.checks.push(Check {
            predicate,
            message,
            bail: false,
        });
        self
    }

    /// Stop the chain if the preceding check failed.
    pub fn bail(mut self) -> Self {
        if let Some(last) = self.checks.last_mut() {
            last.bail = true;
        }
        self
    }

    pub fn run(&self, input: &RequestInput) -> Vec<FieldError> {
        let value = input.get(self.location, self.field);
        if self.optional && value.is_none() {
            return Vec::new();
        }

        let mut errors = Vec::new();
        for check in &self.checks {
            if (check.predicate)(value) {
                continue;
            }
            errors.push(FieldError::new(self.location, self.field, value, check.message));
            if check.bail {
                break;
            }
        }
        errors
    }
}
