//! Health check endpoint

use axum::{Json, Router, routing::get};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    message: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "Shoe Store API is running".to_string(),
    })
}

pub fn router() -> Router {
    Router::new().route("/health", get(health))
}
