use std::sync::Arc;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductChanges};
use crate::repository::ProductRepository;

/// Service layer for Product operations
///
/// Input is already validated by the time it reaches the service; each
/// method performs at most one read and one write against the repository.
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all products, newest first
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Get a product by ID
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a product; availability defaults to `true`
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        self.repository.create(input.into()).await
    }

    /// Replace name, price and availability of an existing product
    pub async fn update_product(&self, id: i32, changes: ProductChanges) -> ProductResult<Product> {
        let mut product = self.get_product(id).await?;

        product.name = changes.name;
        product.price = changes.price;
        product.availability = changes.availability;

        self.repository.save(product).await
    }

    /// Flip the availability flag, leaving every other field untouched
    pub async fn toggle_availability(&self, id: i32) -> ProductResult<Product> {
        let mut product = self.get_product(id).await?;
        product.availability = !product.availability;

        self.repository.save(product).await
    }

    /// Delete a product
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        let product = self.get_product(id).await?;
        self.repository.delete(product).await
    }
}
