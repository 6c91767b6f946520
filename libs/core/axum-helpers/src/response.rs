//! Success envelope shared by every endpoint.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Wraps a successful payload as `{ "data": ... }`.
///
/// The status code is chosen by the handler; on its own this responds `200 OK`.
///
/// ```rust
/// use axum::http::StatusCode;
/// use axum_helpers::ApiResponse;
///
/// let created = (StatusCode::CREATED, ApiResponse::new("ok"));
/// # let _ = created;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
