//! Reusable OpenAPI response types for consistent API documentation.
//!
//! Domain crates document their own 400/404 bodies, since those carry
//! domain-specific messages.

use super::ErrorResponse;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({ "error": "Error interno del servidor" })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
