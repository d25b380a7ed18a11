//! Integration tests for Products domain
//!
//! These tests use real PostgreSQL via testcontainers to ensure:
//! - The products table is created by `sync_schema`
//! - Queries, ordering and limits work against the real database
//! - The `price > 0` constraint is enforced by the table itself
//!
//! They need a running Docker daemon: `cargo test -- --ignored`.

use domain_products::*;
use sea_orm::ConnectionTrait;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

async fn setup() -> TestDatabase {
    let db = TestDatabase::new().await;
    sync_schema(&db.connection).await.unwrap();
    db
}

fn input(name: String, price: f64) -> CreateProduct {
    CreateProduct {
        name,
        price,
        is_available: None,
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_and_get_product() {
    let db = setup().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_get");

    let created = repo
        .create(input(builder.name("product", "main"), builder.price(100.0)))
        .await
        .unwrap();

    assert!(created.id > 0);
    assert!(created.is_available);

    let retrieved = assert_some(
        repo.find_by_id(created.id).await.unwrap(),
        "product should exist",
    );
    assert_eq!(retrieved.name, created.name);
    assert_eq!(retrieved.price, created.price);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_sync_schema_is_idempotent() {
    let db = setup().await;

    sync_schema(&db.connection).await.unwrap();
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_all_orders_and_limits() {
    let db = setup().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("find_all");

    for (suffix, base) in [("a", 5.0), ("b", 25.0), ("c", 15.0), ("d", 35.0)] {
        repo.create(input(builder.name("product", suffix), builder.price(base)))
            .await
            .unwrap();
    }

    let products = repo.find_all(3).await.unwrap();
    let prices: Vec<f64> = products.iter().map(|p| p.price).collect();

    assert_eq!(products.len(), 3);
    assert_price_desc(&prices, "find_all");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_and_delete() {
    let db = setup().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("update_delete");

    let created = repo
        .create(input(builder.name("product", "main"), 10.0))
        .await
        .unwrap();

    let updated = repo
        .update(created.id, UpdateProduct::availability(false))
        .await
        .unwrap();
    assert!(!updated.is_available);
    assert_eq!(updated.name, created.name);
    assert!(updated.updated_at >= created.updated_at);

    assert!(repo.delete(created.id).await.unwrap());
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_price_constraint_is_enforced() {
    let db = setup().await;

    let result = db
        .connection
        .execute_unprepared("INSERT INTO products (name, price) VALUES ('free', 0)")
        .await;

    assert!(result.is_err());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_truncate_resets_ids() {
    let db = setup().await;
    let repo = PgProductRepository::new(db.connection());

    repo.create(input("first".to_string(), 1.0)).await.unwrap();
    db.truncate("products").await;

    let created = repo.create(input("second".to_string(), 1.0)).await.unwrap();
    assert_eq!(created.id, 1);
}
