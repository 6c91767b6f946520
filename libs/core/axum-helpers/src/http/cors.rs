use axum::http::{HeaderValue, Method, header, header::InvalidHeaderValue};
use core_config::cors::CorsConfig;
use std::time::Duration;
use tower_http::cors::CorsLayer;

/// Creates the CORS layer for the single trusted origin in `config`.
///
/// Requests from any other origin get no `Access-Control-Allow-Origin`
/// header. The layer does not block them server-side: a simple cross-origin
/// request still reaches the handler and only its response is hidden from
/// the page. JSON writes need a preflight first, and the browser stops at
/// the failed preflight before sending them.
pub fn create_cors_layer(config: &CorsConfig) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(&config.allowed_origin)?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    fn app() -> Router {
        let config = CorsConfig {
            allowed_origin: "http://localhost:5173".to_string(),
        };
        Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(create_cors_layer(&config).unwrap())
    }

    async fn allow_origin_for(origin: &str) -> Option<HeaderValue> {
        let request = Request::builder()
            .uri("/")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .cloned()
    }

    #[tokio::test]
    async fn test_trusted_origin_is_allowed() {
        assert_eq!(
            allow_origin_for("http://localhost:5173").await,
            Some(HeaderValue::from_static("http://localhost:5173"))
        );
    }

    #[tokio::test]
    async fn test_other_origins_are_not_allowed() {
        assert_eq!(allow_origin_for("http://evil.example").await, None);
    }

    #[tokio::test]
    async fn test_foreign_preflight_is_not_granted_but_handler_still_runs() {
        let preflight = Request::builder()
            .method(Method::OPTIONS)
            .uri("/")
            .header(header::ORIGIN, "http://evil.example")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(preflight).await.unwrap();
        assert!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none()
        );

        let simple = Request::builder()
            .uri("/")
            .header(header::ORIGIN, "http://evil.example")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(simple).await.unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }

    #[test]
    fn test_invalid_origin_is_rejected() {
        let config = CorsConfig {
            allowed_origin: "http://bad\norigin".to_string(),
        };
        assert!(create_cors_layer(&config).is_err());
    }
}
