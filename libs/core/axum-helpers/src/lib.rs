//! # Axum Helpers
//!
//! Shared plumbing for the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly with OpenAPI docs, health checks, graceful shutdown
//! - **[`http`]**: HTTP middleware (single-origin CORS, security headers)
//! - **[`errors`]**: [`AppError`] and the `{ "error" }` / `{ "errors" }` envelopes
//! - **[`response`]**: The `{ "data" }` success envelope
//! - **[`validation`]**: Declarative field rules evaluated before a handler runs
//! - **[`extractors`]**: [`ValidatedRequest`], which applies those rules
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! let router = create_router::<ApiDoc>(Router::new(), &cors_config)?;
//! create_production_app(router, &server_config, Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod response;
pub mod server;
pub mod validation;

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};

// Re-export HTTP middleware
pub use http::{create_cors_layer, security_headers};

// Re-export error and response types
pub use errors::{AppError, ErrorCode, ErrorResponse, ValidationErrorResponse};
pub use response::ApiResponse;

// Re-export validation
pub use extractors::{RequestSchema, ValidatedRequest};
pub use validation::{Check, Constraint, FieldRule, Location, Violation, ViolationList};
