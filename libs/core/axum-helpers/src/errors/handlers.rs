use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{messages, ErrorCode, ErrorResponse};

/// Fallback for unknown routes.
pub async fn not_found() -> Response {
    tracing::debug!(error_code = ErrorCode::RouteNotFound.code(), "No route matched");

    let body = Json(ErrorResponse::new(messages::ROUTE_NOT_FOUND));
    (StatusCode::NOT_FOUND, body).into_response()
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    let body = Json(ErrorResponse::new(messages::METHOD_NOT_ALLOWED));
    (StatusCode::METHOD_NOT_ALLOWED, body).into_response()
}
