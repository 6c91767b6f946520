//! Readiness endpoint backed by a database ping

use axum::{Router, extract::State, response::Response, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use database::postgres::{DatabaseConnection, check_health};

async fn ready(State(db): State<DatabaseConnection>) -> Response {
    let database: HealthCheckFuture =
        Box::pin(async { check_health(&db).await.map_err(|e| e.to_string()) });

    run_health_checks(vec![("database", database)]).await
}

/// Router exposing `GET /ready`
pub fn router(db: DatabaseConnection) -> Router {
    Router::new().route("/ready", get(ready)).with_state(db)
}
