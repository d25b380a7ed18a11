//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
use crate::validation::ValidationErrors;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({ "error": "An unexpected error occurred." })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Service Unavailable - database connection could not be acquired",
    content_type = "application/json",
    example = json!({ "error": "Service temporarily unavailable." })
)]
pub struct ServiceUnavailableResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - one or more fields failed validation",
    content_type = "application/json",
    example = json!({
        "errors": [{
            "type": "field",
            "value": 0,
            "msg": "Invalid price",
            "param": "price",
            "location": "body"
        }]
    })
)]
pub struct BadRequestValidationResponse(pub ValidationErrors);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - invalid id path parameter",
    content_type = "application/json",
    example = json!({
        "errors": [{
            "type": "field",
            "value": "not-valid-url",
            "msg": "Id must be numeric",
            "param": "id",
            "location": "params"
        }]
    })
)]
pub struct BadRequestIdResponse(pub ValidationErrors);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - body is not valid JSON",
    content_type = "application/json",
    example = json!({
        "error": "Invalid JSON format.",
        "message": "EOF while parsing an object at line 1 column 1"
    })
)]
pub struct BadRequestInvalidJsonResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({ "error": "Product not found." })
)]
pub struct NotFoundResponse(pub ErrorResponse);
