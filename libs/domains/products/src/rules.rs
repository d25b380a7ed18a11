//! Validation rule sets for the product routes.
//!
//! Each rule set lists its field chains in the order failures are reported
//! and converts the validated input into what the handler works with.

use axum_helpers::validation::{FieldChain, RequestInput, checks};
use axum_helpers::{AppError, RuleSet};
use serde_json::Value;

use crate::error::PRODUCT_NOT_FOUND;
use crate::models::{CreateProduct, UpdateProduct};

fn id_chain() -> FieldChain {
    FieldChain::param("id")
        .check(checks::is_int, "Id must be numeric")
        .bail()
        .check(checks::is_positive, "Id must be greater than 0")
}

fn name_chain() -> FieldChain {
    FieldChain::body("name")
        .check(checks::not_empty, "Product name cannot be empty")
        .bail()
        .check(checks::is_string, "Product name must be text")
}

fn price_chain() -> FieldChain {
    FieldChain::body("price")
        .check(checks::not_empty, "Product price cannot be empty")
        .bail()
        .check(checks::is_numeric, "Invalid value")
        .bail()
        .check(checks::is_positive, "Invalid price")
}

fn availability_chain() -> FieldChain {
    FieldChain::body("isAvailable")
        .optional()
        .check(checks::is_boolean, "Invalid availability value")
}

/// A valid id that does not fit the key column cannot match a stored product.
fn product_id(input: &RequestInput) -> Result<i32, AppError> {
    let id = input.param("id");
    if !checks::is_int(id) {
        return Err(AppError::BadRequest("Id must be numeric".to_string()));
    }

    id.and_then(checks::as_i64)
        .and_then(|id| i32::try_from(id).ok())
        .ok_or_else(|| AppError::NotFound(PRODUCT_NOT_FOUND.to_string()))
}

fn product_fields(input: &RequestInput) -> Result<CreateProduct, AppError> {
    let name = input
        .body_field("name")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::BadRequest("Product name must be text".to_string()))?;
    let price = input
        .body_field("price")
        .and_then(checks::as_f64)
        .ok_or_else(|| AppError::BadRequest("Invalid value".to_string()))?;

    Ok(CreateProduct {
        name: name.to_string(),
        price,
        is_available: availability(input),
    })
}

fn availability(input: &RequestInput) -> Option<bool> {
    input.body_field("isAvailable").and_then(checks::as_bool)
}

/// `GET`/`DELETE /products/{id}`
pub struct ProductIdRules;

impl RuleSet for ProductIdRules {
    type Output = i32;

    fn chains() -> Vec<FieldChain> {
        vec![id_chain()]
    }

    fn extract(input: &RequestInput) -> Result<i32, AppError> {
        product_id(input)
    }
}

/// `POST /products`
pub struct CreateProductRules;

impl RuleSet for CreateProductRules {
    type Output = CreateProduct;

    fn chains() -> Vec<FieldChain> {
        vec![name_chain(), price_chain()]
    }

    fn extract(input: &RequestInput) -> Result<CreateProduct, AppError> {
        product_fields(input)
    }
}

/// `PUT /products/{id}`
pub struct UpdateProductRules;

impl RuleSet for UpdateProductRules {
    type Output = (i32, UpdateProduct);

    fn chains() -> Vec<FieldChain> {
        vec![id_chain(), name_chain(), price_chain(), availability_chain()]
    }

    fn extract(input: &RequestInput) -> Result<Self::Output, AppError> {
        Ok((product_id(input)?, product_fields(input)?.into()))
    }
}

/// `PATCH /products/{id}`
pub struct PatchAvailabilityRules;

impl RuleSet for PatchAvailabilityRules {
    type Output = (i32, Option<bool>);

    fn chains() -> Vec<FieldChain> {
        vec![id_chain(), availability_chain()]
    }

    fn extract(input: &RequestInput) -> Result<Self::Output, AppError> {
        Ok((product_id(input)?, availability(input)))
    }
}
