//! Request extractor that runs a declarative rule table before the handler.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{HeaderMap, header},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::errors::{AppError, messages};
use crate::validation::{FieldRule, Location, Violation, ViolationList, validate};

/// A typed request whose fields are described by a static rule table.
///
/// Path parameters and body fields deserialize into the same struct, so a
/// `PUT /{id}` request type carries `id` next to the body fields.
pub trait RequestSchema: DeserializeOwned {
    const RULES: &'static [FieldRule];
}

/// Extracts and validates a [`RequestSchema`] from the path and JSON body.
///
/// Every rule is evaluated and all violations are rejected together as
/// [`AppError::Validation`], so the handler only ever sees valid input.
/// The body is read only when a rule refers to it. Requests whose
/// content type is not JSON are treated as having an empty body.
///
/// ```ignore
/// async fn update(
///     State(service): State<Arc<ProductService<R>>>,
///     ValidatedRequest(input): ValidatedRequest<UpdateProduct>,
/// ) -> Result<ApiResponse<Product>, AppError> { ... }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedRequest<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedRequest<T>
where
    T: RequestSchema,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        // Routes without parameters reject `Path`; that simply means none were given.
        let params = Path::<HashMap<String, String>>::from_request_parts(&mut parts, state)
            .await
            .map(|Path(params)| params)
            .unwrap_or_default();

        let mut input = Map::new();
        let mut body_violation = None;

        if T::RULES.iter().any(|rule| rule.location == Location::Body) {
            let is_json = is_json_content(&parts.headers);
            let bytes = Bytes::from_request(Request::from_parts(parts, body), state).await;

            match bytes {
                Ok(bytes) if is_json => match parse_object(&bytes) {
                    Ok(object) => input = object,
                    Err(violation) => body_violation = Some(violation),
                },
                Ok(_) => {}
                Err(rejection) => {
                    tracing::debug!("Failed to read request body: {}", rejection);
                    body_violation = Some(body_error(messages::BODY_UNREADABLE));
                }
            }
        }

        for (key, value) in params {
            input.insert(key, Value::String(value));
        }

        // An unusable body has no fields to check; report it once instead.
        let rules = T::RULES
            .iter()
            .filter(|rule| body_violation.is_none() || rule.location == Location::Params);

        let mut violations = match validate(rules, input) {
            Ok(value) if body_violation.is_none() => {
                return serde_json::from_value(value)
                    .map(ValidatedRequest)
                    .map_err(|e| {
                        AppError::InternalServerError(format!(
                            "validated input does not match request type: {}",
                            e
                        ))
                    });
            }
            Ok(_) => ViolationList::new(),
            Err(violations) => violations,
        };

        if let Some(violation) = body_violation {
            violations.push(violation);
        }

        Err(AppError::Validation(violations))
    }
}

fn is_json_content(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

fn parse_object(bytes: &[u8]) -> Result<Map<String, Value>, Violation> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(_) => Err(body_error(messages::BODY_NOT_OBJECT)),
        Err(_) => Err(body_error(messages::INVALID_JSON)),
    }
}

fn body_error(message: &str) -> Violation {
    Violation::new("body", Location::Body, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{Check, Constraint};
    use axum::{
        Json, Router,
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        response::IntoResponse,
        routing::put,
    };
    use http_body_util::BodyExt;
    use serde::{Deserialize, Serialize};
    use serde_json::json;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize, Serialize)]
    struct Rename {
        id: i32,
        name: String,
    }

    impl RequestSchema for Rename {
        const RULES: &'static [FieldRule] = &[
            FieldRule::param("id", &[Check::new(Constraint::Integer, "bad id")]),
            FieldRule::body("name", &[Check::new(Constraint::NonEmpty, "no name")]),
        ];
    }

    #[derive(Debug, Deserialize, Serialize)]
    struct ById {
        id: i32,
    }

    impl RequestSchema for ById {
        const RULES: &'static [FieldRule] =
            &[FieldRule::param("id", &[Check::new(Constraint::Integer, "bad id")])];
    }

    async fn echo_rename(ValidatedRequest(input): ValidatedRequest<Rename>) -> impl IntoResponse {
        Json(input)
    }

    async fn echo_id(ValidatedRequest(input): ValidatedRequest<ById>) -> impl IntoResponse {
        Json(input)
    }

    fn app() -> Router {
        Router::new().route("/{id}", put(echo_rename).patch(echo_id))
    }

    async fn send(request: HttpRequest<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn json_put(uri: &str, body: &str) -> HttpRequest<Body> {
        HttpRequest::builder()
            .method("PUT")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_path_and_body_are_merged() {
        let (status, body) = send(json_put("/12", r#"{"name":"Mouse"}"#)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"id": 12, "name": "Mouse"}));
    }

    #[tokio::test]
    async fn test_path_parameter_wins_over_body_field() {
        let (status, body) = send(json_put("/12", r#"{"id":99,"name":"Mouse"}"#)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], json!(12));
    }

    #[tokio::test]
    async fn test_param_and_body_violations_are_aggregated() {
        let (status, body) = send(json_put("/abc", r#"{"name":""}"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"errors": [
                {"field": "id", "location": "params", "message": "bad id"},
                {"field": "name", "location": "body", "message": "no name"},
            ]})
        );
    }

    #[tokio::test]
    async fn test_malformed_json_is_reported_on_body() {
        let (status, body) = send(json_put("/abc", "{not json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["field"], json!("id"));
        assert_eq!(body["errors"][1]["field"], json!("body"));
        assert_eq!(body["errors"][1]["message"], json!(messages::INVALID_JSON));
        assert_eq!(body["errors"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_non_object_body_is_rejected() {
        let (status, body) = send(json_put("/1", "[1, 2]")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["message"], json!(messages::BODY_NOT_OBJECT));
    }

    #[tokio::test]
    async fn test_non_json_content_type_counts_as_empty_body() {
        let request = HttpRequest::builder()
            .method("PUT")
            .uri("/1")
            .header("content-type", "text/plain")
            .body(Body::from(r#"{"name":"Mouse"}"#))
            .unwrap();

        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["message"], json!("no name"));
    }

    #[tokio::test]
    async fn test_param_only_schema_ignores_body() {
        let request = HttpRequest::builder()
            .method("PATCH")
            .uri("/5")
            .header("content-type", "application/json")
            .body(Body::from("{broken"))
            .unwrap();

        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"id": 5}));
    }

    #[test]
    fn test_json_content_type_detection() {
        let mut headers = HeaderMap::new();
        assert!(!is_json_content(&headers));

        headers.insert(
            header::CONTENT_TYPE,
            "application/json; charset=utf-8".parse().unwrap(),
        );
        assert!(is_json_content(&headers));

        headers.insert(
            header::CONTENT_TYPE,
            "application/merge-patch+json".parse().unwrap(),
        );
        assert!(is_json_content(&headers));
    }
}
