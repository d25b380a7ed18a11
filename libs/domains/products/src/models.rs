use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Product as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Surrogate key, assigned on creation
    pub id: i32,
    pub name: String,
    /// Always greater than zero
    pub price: f64,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Overwrites the fields present in `changes` and touches `updated_at`.
    pub fn apply(&mut self, changes: UpdateProduct) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(is_available) = changes.is_available {
            self.is_available = is_available;
        }
        self.updated_at = Utc::now();
    }
}

/// Product as returned by the list endpoint (no audit timestamps)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, FromQueryResult)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub is_available: bool,
}

impl From<Product> for ProductSummary {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            is_available: product.is_available,
        }
    }
}

/// Body of create and full-update requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(length(min = 1))]
    #[schema(example = "Mouse Testing")]
    pub name: String,
    /// A number or a numeric string
    #[validate(range(exclusive_min = 0.0))]
    #[schema(example = 500)]
    pub price: f64,
    /// Defaults to `true`
    #[serde(default)]
    pub is_available: Option<bool>,
}

/// Fields to overwrite on an existing product; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(range(exclusive_min = 0.0))]
    pub price: Option<f64>,
    pub is_available: Option<bool>,
}

impl UpdateProduct {
    pub fn availability(is_available: bool) -> Self {
        Self {
            is_available: Some(is_available),
            ..Self::default()
        }
    }
}

impl From<CreateProduct> for UpdateProduct {
    fn from(input: CreateProduct) -> Self {
        Self {
            name: Some(input.name),
            price: Some(input.price),
            is_available: input.is_available,
        }
    }
}

/// Body of the availability patch; an absent value flips the current one
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityPatch {
    pub is_available: Option<bool>,
}

/// `{ "data": ... }` envelope, with a message on writes
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DataResponse<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Product removed successfully.")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product() -> Product {
        let now = Utc::now();
        Product {
            id: 1,
            name: "Keyboard".to_string(),
            price: 120.0,
            is_available: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let value = serde_json::to_value(product()).unwrap();
        assert_eq!(value["isAvailable"], json!(true));
        assert!(value.get("createdAt").is_some());
        assert!(value.get("is_available").is_none());
    }

    #[test]
    fn test_summary_has_no_timestamps() {
        let value = serde_json::to_value(ProductSummary::from(product())).unwrap();
        assert!(value.get("createdAt").is_none());
        assert!(value.get("updatedAt").is_none());
    }

    #[test]
    fn test_apply_keeps_absent_fields() {
        let mut product = product();
        product.apply(UpdateProduct::availability(false));

        assert_eq!(product.name, "Keyboard");
        assert_eq!(product.price, 120.0);
        assert!(!product.is_available);
    }

    #[test]
    fn test_create_product_validation() {
        let input = CreateProduct {
            name: String::new(),
            price: 0.0,
            is_available: None,
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn test_data_response_omits_missing_message() {
        let value = serde_json::to_value(DataResponse::new(1)).unwrap();
        assert_eq!(value, json!({ "data": 1 }));
    }
}
