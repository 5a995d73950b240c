//! Readiness endpoint

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use mongodb::Database;
use serde_json::Value;

/// Router exposing `GET /ready`
pub fn router(db: Database) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(db)
}

/// 200 when MongoDB answers a ping, 503 otherwise
async fn readiness_check(
    State(db): State<Database>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let mongodb: HealthCheckFuture = Box::pin(async move {
        let status = database::mongodb::check_health(&db).await;
        if status.healthy {
            tracing::debug!(response_time_ms = status.response_time_ms, "MongoDB ping");
            Ok(())
        } else {
            Err(status.message.unwrap_or_default())
        }
    });

    run_health_checks(vec![("mongodb", mongodb)]).await
}
