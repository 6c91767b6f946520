//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        version = "0.1.0",
        description = "CRUD and availability management for products",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_product_route_is_documented() {
        let doc = ApiDoc::openapi();

        let collection = doc.paths.paths.get("/api/products").unwrap();
        assert!(collection.get.is_some());
        assert!(collection.post.is_some());

        let item = doc.paths.paths.get("/api/products/{id}").unwrap();
        assert!(item.get.is_some());
        assert!(item.put.is_some());
        assert!(item.patch.is_some());
        assert!(item.delete.is_some());
    }

    #[test]
    fn test_error_examples_use_product_messages() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let responses = &doc["components"]["responses"];

        assert_eq!(
            responses["ProductNotFoundResponse"]["content"]["application/json"]["example"],
            serde_json::json!({ "error": domain_products::NOT_FOUND_MESSAGE })
        );
        assert_eq!(
            responses["InvalidProductIdResponse"]["content"]["application/json"]["example"]
                ["errors"][0]["message"],
            "ID no válido"
        );
    }
}
