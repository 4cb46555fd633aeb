use axum::Json;
use serde_json::{json, Value};

/// GET / (and HEAD /)
/// Liveness probe for load balancers and the frontend dev server.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Resume parser service is running"
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-parser-api"
    }))
}
