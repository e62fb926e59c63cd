use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;
use tracing::{debug, info};

use crate::{
    error::AppResult,
    extract::{Json as JsonBody, Path, ProductId},
    models::{NewProduct, Product, ProductPatch},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    let products = state.store.read().await.list_all();
    debug!(count = products.len(), "Listed products");
    Json(products)
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewProduct>,
) -> (StatusCode, Json<Product>) {
    let product = state.store.write().await.create(payload);
    info!(id = product.id, name = %product.name, "Created product");
    (StatusCode::CREATED, Json(product))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> AppResult<Json<Product>> {
    let product = state.store.read().await.get(id)?;
    debug!(id, "Fetched product");
    Ok(Json(product))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    JsonBody(patch): JsonBody<ProductPatch>,
) -> AppResult<Json<Product>> {
    let product = state.store.write().await.update(id, patch)?;
    info!(id, "Updated product");
    Ok(Json(product))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> AppResult<Json<serde_json::Value>> {
    let mut store = state.store.write().await;
    let removed = store.delete(id)?;
    let remaining = store.len();
    drop(store);

    info!(id, name = %removed.name, remaining, "Deleted product");
    Ok(Json(json!({ "message": "Producto eliminado exitosamente" })))
}

// ── By category ───────────────────────────────────────────────────────────────

pub async fn list_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Json<Vec<Product>> {
    let products = state.store.read().await.list_by_category(&category);
    debug!(%category, count = products.len(), "Listed products by category");
    Json(products)
}
