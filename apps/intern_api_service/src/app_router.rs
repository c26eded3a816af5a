use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::{
    assistant::assistant_controller::assistant_router, health::health_controller::health,
};

pub fn application_router() -> Router {
    Router::new()
        .nest("/api", api_router())
        .fallback(endpoint_not_found)
}

fn api_router() -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(assistant_router())
        .method_not_allowed_fallback(endpoint_not_found)
}

async fn endpoint_not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Endpoint not found",
            "success": false
        })),
    )
}
