use axum_helpers::{ErrorResponse, ValidationErrorResponse};
use serde::{Deserialize, Serialize};
use utoipa::{ToResponse, ToSchema};

/// A product as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Assigned by the store on creation
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Mouse")]
    pub name: String,
    #[schema(example = 50.0)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
}

/// Fields of a product about to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

/// Body of `POST /`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateProduct {
    #[schema(example = "Mouse", max_length = 100)]
    pub name: String,
    #[schema(example = 50.0, exclusive_minimum = 0.0)]
    pub price: f64,
    /// Defaults to `true`
    #[serde(default)]
    pub availability: Option<bool>,
}

impl From<CreateProduct> for NewProduct {
    fn from(input: CreateProduct) -> Self {
        Self {
            name: input.name,
            price: input.price,
            availability: input.availability.unwrap_or(true),
        }
    }
}

/// Body of `PUT /{id}`: every mutable field is replaced
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct ProductChanges {
    #[schema(example = "Mouse Pro", max_length = 100)]
    pub name: String,
    #[schema(example = 75.0, exclusive_minimum = 0.0)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
}

/// Full update request: the path id plus the replacement fields
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduct {
    pub id: i32,
    #[serde(flatten)]
    pub changes: ProductChanges,
}

/// Requests addressing a single product by path id
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ProductId {
    pub id: i32,
}

// Response envelopes, documented per payload

#[derive(ToSchema)]
pub struct ProductResponse {
    pub data: Product,
}

#[derive(ToSchema)]
pub struct ProductListResponse {
    pub data: Vec<Product>,
}

#[derive(ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Producto Eliminado")]
    pub data: String,
}

// Error responses with the messages this API actually returns

#[derive(ToResponse)]
#[response(
    description = "No product has this id",
    content_type = "application/json",
    example = json!({ "error": "Producto No Encontrado" })
)]
pub struct ProductNotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - one entry per failed field",
    content_type = "application/json",
    example = json!({
        "errors": [
            { "field": "name", "location": "body", "message": "El Nombre de Producto no puede ir vacio" },
            { "field": "price", "location": "body", "message": "Precio no válido" }
        ]
    })
)]
pub struct InvalidProductResponse(pub ValidationErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - id is not an integer",
    content_type = "application/json",
    example = json!({
        "errors": [
            { "field": "id", "location": "params", "message": "ID no válido" }
        ]
    })
)]
pub struct InvalidProductIdResponse(pub ValidationErrorResponse);
