//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductSummary, UpdateProduct};
use crate::repository::ProductRepository;

/// Number of products returned by the list endpoint
pub const LIST_LIMIT: u64 = 3;

/// Product service providing business logic operations
///
/// Every write on an existing product looks it up first, so a missing id is
/// reported as [`ProductError::NotFound`] before anything is written.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Most expensive products, at most [`LIST_LIMIT`]
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<ProductSummary>> {
        self.repository.find_all(LIST_LIMIT).await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Overwrite the supplied fields of an existing product
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.get_product(id).await?;
        self.repository.update(id, input).await
    }

    /// Set availability to `value`, or flip it when `value` is `None`
    #[instrument(skip(self))]
    pub async fn set_availability(&self, id: i32, value: Option<bool>) -> ProductResult<Product> {
        let product = self.get_product(id).await?;
        let is_available = value.unwrap_or(!product.is_available);

        self.repository
            .update(id, UpdateProduct::availability(is_available))
            .await
    }

    /// Delete a product permanently
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        self.get_product(id).await?;

        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(ProductError::NotFound(id))
        }
    }
}
