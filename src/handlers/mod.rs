pub mod products;

use axum::{http::StatusCode, Json};
use serde_json::json;

pub const SERVICE_NAME: &str = "productos-api";

pub async fn root() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "message": "Microservicio de Productos",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy", "service": SERVICE_NAME })))
}
