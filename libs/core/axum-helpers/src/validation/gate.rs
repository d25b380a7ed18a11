use super::{FieldChain, Location, RequestInput};
use crate::errors::ErrorCode;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// A single failed check.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    /// Always `"field"`
    #[serde(rename = "type")]
    pub kind: String,
    /// The offending value; omitted when the field was absent
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub value: Option<Value>,
    pub msg: String,
    pub param: String,
    pub location: Location,
}

impl FieldError {
    pub fn new(location: Location, param: &str, value: Option<&Value>, msg: &str) -> Self {
        Self {
            kind: "field".to_string(),
            value: value.cloned(),
            msg: msg.to_string(),
            param: param.to_string(),
            location,
        }
    }
}

/// Body of a 400 response produced by the validation gate.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema, thiserror::Error)]
#[error("request validation failed with {} error(s)", .errors.len())]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl IntoResponse for ValidationErrors {
    fn into_response(self) -> Response {
        tracing::info!(
            error_code = ErrorCode::ValidationError.code(),
            failed = self.errors.len(),
            "Request rejected by validation"
        );
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

/// Run every chain in declaration order and collect the failures.
pub fn run_chains(chains: &[FieldChain], input: &RequestInput) -> Vec<FieldError> {
    chains.iter().flat_map(|chain| chain.run(input)).collect()
}

/// Turn collected failures into a rejection; an empty list lets the request through.
pub fn gate(errors: Vec<FieldError>) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { errors })
    }
}

pub fn validate(chains: &[FieldChain], input: &RequestInput) -> Result<(), ValidationErrors> {
    gate(run_chains(chains, input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::checks;
    use http_body_util::BodyExt;
    use serde_json::json;

    fn chains() -> Vec<FieldChain> {
        vec![
            FieldChain::param("id")
                .check(checks::is_int, "Id must be numeric")
                .bail()
                .check(checks::is_positive, "Id must be greater than 0"),
            FieldChain::body("name")
                .check(checks::not_empty, "Product name cannot be empty")
                .bail()
                .check(checks::is_string, "Product name must be text"),
        ]
    }

    #[test]
    fn test_errors_keep_declaration_order() {
        let input = RequestInput::default().with_param("id", "0");
        let errors = run_chains(&chains(), &input);

        let params: Vec<_> = errors.iter().map(|e| e.param.as_str()).collect();
        assert_eq!(params, vec!["id", "name"]);
        assert_eq!(errors[0].msg, "Id must be greater than 0");
    }

    #[test]
    fn test_gate_passes_clean_input() {
        let input =
            RequestInput::from_body(json!({ "name": "Keyboard" })).with_param("id", "3");
        assert!(validate(&chains(), &input).is_ok());
    }

    #[test]
    fn test_gate_is_deterministic() {
        let input = RequestInput::default().with_param("id", "x");
        let first = validate(&chains(), &input).unwrap_err();
        let second = validate(&chains(), &input).unwrap_err();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_rejection_body_shape() {
        let input = RequestInput::default().with_param("id", "abc");
        let response = validate(&chains(), &input).unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body["errors"][0],
            json!({
                "type": "field",
                "value": "abc",
                "msg": "Id must be numeric",
                "param": "id",
                "location": "params"
            })
        );
        assert!(body["errors"][1].get("value").is_none());
    }
}
