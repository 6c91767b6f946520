use async_trait::async_trait;
use sea_orm::DbErr;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{NewProduct, Product};

/// Repository trait for Product persistence
///
/// Each method is a single round trip to the store. Read-then-write
/// sequences are composed by the service and are not isolated.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, highest id first
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Insert a product; the store assigns its id
    async fn create(&self, input: NewProduct) -> ProductResult<Product>;

    /// Overwrite every field of an existing product
    async fn save(&self, product: Product) -> ProductResult<Product>;

    /// Remove a product permanently
    async fn delete(&self, product: Product) -> ProductResult<()>;
}

#[derive(Debug, Default)]
struct Store {
    products: BTreeMap<i32, Product>,
    last_id: i32,
}

/// In-memory implementation of ProductRepository (for development/testing)
///
/// Ids start at 1 and are never reused, like a `SERIAL` column.
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
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.products.values().rev().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn create(&self, input: NewProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        let id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| DbErr::Custom("product id sequence exhausted".to_string()))?;
        store.last_id = id;

        let product = Product {
            id,
            name: input.name,
            price: input.price,
            availability: input.availability,
        };
        store.products.insert(id, product.clone());

        tracing::info!(product_id = id, "Created product");
        Ok(product)
    }

    async fn save(&self, product: Product) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        let existing = store
            .products
            .get_mut(&product.id)
            .ok_or(ProductError::NotFound(product.id))?;
        *existing = product.clone();

        tracing::info!(product_id = product.id, "Saved product");
        Ok(product)
    }

    async fn delete(&self, product: Product) -> ProductResult<()> {
        let mut store = self.store.write().await;

        store
            .products
            .remove(&product.id)
            .ok_or(ProductError::NotFound(product.id))?;

        tracing::info!(product_id = product.id, "Deleted product");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_product(name: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            price: 10.0,
            availability: true,
        }
    }

    #[tokio::test]
    async fn test_ids_are_sequential_and_not_reused() {
        let repo = InMemoryProductRepository::new();

        let first = repo.create(new_product("a")).await.unwrap();
        let second = repo.create(new_product("b")).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        repo.delete(second).await.unwrap();
        let third = repo.create(new_product("c")).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id_descending() {
        let repo = InMemoryProductRepository::new();
        for name in ["a", "b", "c"] {
            repo.create(new_product(name)).await.unwrap();
        }

        let ids: Vec<i32> = repo.list().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_save_overwrites_existing_product() {
        let repo = InMemoryProductRepository::new();
        let mut product = repo.create(new_product("a")).await.unwrap();

        product.name = "renamed".to_string();
        product.availability = false;
        repo.save(product.clone()).await.unwrap();

        assert_eq!(repo.get_by_id(product.id).await.unwrap(), Some(product));
    }

    #[tokio::test]
    async fn test_save_and_delete_of_missing_product_fail() {
        let repo = InMemoryProductRepository::new();
        let ghost = Product {
            id: 99,
            name: "ghost".to_string(),
            price: 1.0,
            availability: true,
        };

        assert!(matches!(
            repo.save(ghost.clone()).await,
            Err(ProductError::NotFound(99))
        ));
        assert!(matches!(
            repo.delete(ghost).await,
            Err(ProductError::NotFound(99))
        ));
    }
}
