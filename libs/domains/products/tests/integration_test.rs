//! PostgreSQL-backed tests for `PgProductRepository`.
//!
//! These start a container through `test_utils::TestDatabase` and therefore
//! need Docker: run them with `cargo test -- --ignored`.

use domain_products::*;
use test_utils::{TestDataBuilder, TestDatabase};

fn new_product(builder: &TestDataBuilder, suffix: &str) -> NewProduct {
    NewProduct {
        name: builder.name("product", suffix),
        price: builder.price(),
        availability: true,
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_assigns_ids_and_lists_newest_first() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_list_order");

    let first = repo.create(new_product(&builder, "a")).await.unwrap();
    let second = repo.create(new_product(&builder, "b")).await.unwrap();
    assert!(second.id > first.id);

    let ids: Vec<i32> = repo.list().await.unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_save_and_delete_round_trip() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_save_delete");

    let mut product = repo.create(new_product(&builder, "main")).await.unwrap();
    product.name = builder.name("product", "renamed");
    product.availability = false;

    let saved = repo.save(product.clone()).await.unwrap();
    assert_eq!(saved, product);
    assert_eq!(repo.get_by_id(product.id).await.unwrap(), Some(product.clone()));

    repo.delete(product.clone()).await.unwrap();
    assert_eq!(repo.get_by_id(product.id).await.unwrap(), None);
    assert!(matches!(
        repo.delete(product).await,
        Err(ProductError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_service_over_postgres_toggles_availability() {
    let db = TestDatabase::new().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));

    let created = service
        .create_product(CreateProduct {
            name: "Mouse".to_string(),
            price: 50.0,
            availability: None,
        })
        .await
        .unwrap();
    assert!(created.availability);

    let toggled = service.toggle_availability(created.id).await.unwrap();
    assert!(!toggled.availability);
    assert_eq!(toggled.name, created.name);

    db.truncate("products").await;
    assert!(matches!(
        service.get_product(created.id).await,
        Err(ProductError::NotFound(_))
    ));
}
