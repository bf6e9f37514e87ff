use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use chrono::Utc;
use serde_json::json;

use crate::{db, AppState};

/// Liveness plus a database ping. Degraded storage reports as "unhealthy"
/// without failing the request itself.
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let database = match db::ping(&state.db).await {
        Ok(()) => "healthy",
        Err(_) => "unhealthy",
    };

    Json(json!({
        "status": if database == "healthy" { "ok" } else { "degraded" },
        "database": database,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health))
}
