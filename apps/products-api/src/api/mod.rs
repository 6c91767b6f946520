//! API routes module

pub mod health;

use axum::Router;
use domain_products::{ProductRepository, ProductService, handlers};

/// Create all API routes (nested under `/api` by `create_router`)
pub fn routes<R: ProductRepository + 'static>(repository: R) -> Router {
    let service = ProductService::new(repository);
    Router::new().nest("/products", handlers::router(service))
}
