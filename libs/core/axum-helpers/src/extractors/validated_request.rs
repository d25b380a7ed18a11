//! Extractor that runs a route's validation chains before the handler.

use crate::errors::AppError;
use crate::validation::{FieldChain, RequestInput, validate};
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Validation rules for one route, plus the conversion of validated input
/// into the typed value the handler receives.
pub trait RuleSet {
    type Output: Send;

    /// Chains in the order their failures should be reported.
    fn chains() -> Vec<FieldChain>;

    /// Called only after every chain passed.
    fn extract(input: &RequestInput) -> Result<Self::Output, AppError>;
}

/// Validated, typed request input.
///
/// Collects path parameters and the JSON body, runs `R::chains()` and the
/// gate, and hands `R::extract` output to the handler. An empty body is
/// treated as `{}`; a body that is not JSON is rejected before validation.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::{RuleSet, ValidatedRequest};
/// use axum_helpers::validation::{FieldChain, RequestInput, checks};
///
/// struct ById;
///
/// impl RuleSet for ById {
///     type Output = i64;
///
///     fn chains() -> Vec<FieldChain> {
///         vec![FieldChain::param("id").check(checks::is_int, "Id must be numeric")]
///     }
///
///     fn extract(input: &RequestInput) -> Result<i64, AppError> {
///         input
///             .param("id")
///             .and_then(checks::as_i64)
///             .ok_or_else(|| AppError::BadRequest("id".into()))
///     }
/// }
///
/// async fn show(ValidatedRequest(id): ValidatedRequest<ById>) -> String {
///     format!("item {id}")
/// }
/// ```
pub struct ValidatedRequest<R: RuleSet>(pub R::Output);

impl<R, S> FromRequest<S> for ValidatedRequest<R>
where
    R: RuleSet,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        // Routes without path parameters have nothing to extract.
        let params = Path::<HashMap<String, String>>::from_request_parts(&mut parts, state)
            .await
            .map(|Path(params)| params)
            .unwrap_or_default();

        let bytes = Bytes::from_request(Request::from_parts(parts, body), state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let input = RequestInput::new(params, parse_body(&bytes)?);
        validate(&R::chains(), &input)?;

        R::extract(&input).map(ValidatedRequest)
    }
}

fn parse_body(bytes: &[u8]) -> Result<Value, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(bytes).map_err(|e| AppError::InvalidJson(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_body_is_empty_object() {
        assert_eq!(parse_body(b"").unwrap(), json!({}));
        assert_eq!(parse_body(b"  \n").unwrap(), json!({}));
    }

    #[test]
    fn test_malformed_body_is_rejected() {
        let err = parse_body(b"{\"name\": ").unwrap_err();
        assert!(matches!(err, AppError::InvalidJson(_)));
    }

    #[test]
    fn test_body_is_parsed() {
        assert_eq!(parse_body(br#"{"price":"500"}"#).unwrap(), json!({ "price": "500" }));
    }
}
