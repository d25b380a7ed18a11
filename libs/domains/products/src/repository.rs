use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductSummary, UpdateProduct};

/// Repository trait for Product persistence
///
/// Implemented over PostgreSQL ([`PgProductRepository`](crate::PgProductRepository))
/// and in memory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Most expensive products first, at most `limit` of them
    async fn find_all(&self, limit: u64) -> ProductResult<Vec<ProductSummary>>;

    /// Get a product by ID
    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Insert a product; the store assigns the id
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Load, apply `input`, save
    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product>;

    /// Delete a product by ID; `false` when nothing was removed
    async fn delete(&self, id: i32) -> ProductResult<bool>;
}

#[derive(Debug, Default)]
struct Store {
    products: BTreeMap<i32, Product>,
    last_id: i32,
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self, limit: u64) -> ProductResult<Vec<ProductSummary>> {
        let store = self.store.read().await;

        let mut products: Vec<ProductSummary> = store
            .products
            .values()
            .cloned()
            .map(ProductSummary::from)
            .collect();
        products.sort_by(|a, b| b.price.total_cmp(&a.price));
        products.truncate(usize::try_from(limit).unwrap_or(usize::MAX));

        Ok(products)
    }

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        store.last_id += 1;
        let now = Utc::now();
        let product = Product {
            id: store.last_id,
            name: input.name,
            price: input.price,
            is_available: input.is_available.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };
        store.products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        let product = store
            .products
            .get_mut(&id)
            .ok_or(ProductError::NotFound(id))?;
        product.apply(input);

        tracing::info!(product_id = id, "Updated product");
        Ok(product.clone())
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut store = self.store.write().await;

        let removed = store.products.remove(&id).is_some();
        if removed {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, price: f64) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            price,
            is_available: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryProductRepository::new();

        let first = repo.create(input("Mouse", 20.0)).await.unwrap();
        let second = repo.create(input("Keyboard", 80.0)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(first.is_available, "availability defaults to true");
    }

    #[tokio::test]
    async fn test_find_all_orders_by_price_and_limits() {
        let repo = InMemoryProductRepository::new();
        for (name, price) in [("a", 10.0), ("b", 40.0), ("c", 30.0), ("d", 20.0)] {
            repo.create(input(name, price)).await.unwrap();
        }

        let products = repo.find_all(3).await.unwrap();
        let prices: Vec<f64> = products.iter().map(|p| p.price).collect();

        assert_eq!(prices, vec![40.0, 30.0, 20.0]);
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let repo = InMemoryProductRepository::new();

        let result = repo.update(42, UpdateProduct::availability(false)).await;

        assert!(matches!(result, Err(ProductError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_delete_is_terminal() {
        let repo = InMemoryProductRepository::new();
        let product = repo.create(input("Mouse", 20.0)).await.unwrap();

        assert!(repo.delete(product.id).await.unwrap());
        assert!(!repo.delete(product.id).await.unwrap());
        assert!(repo.find_by_id(product.id).await.unwrap().is_none());
    }
}
