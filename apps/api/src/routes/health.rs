use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Liveness check.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "message": "Resume Tailor Agent API is running!"
    }))
}
