//! 产品处理器

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};
use tracing::debug;

use super::{
    model::{Product, ProductInput},
    service::ProductService,
};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

fn product_id(id: Result<Path<i32>, PathRejection>) -> Result<i32, CoreError> {
    id.map(|Path(id)| id).map_err(|rejection| {
        debug!("rejected product id: {}", rejection);
        CoreError::BadRequest("Invalid product ID".to_string())
    })
}

fn payload(body: Result<Json<ProductInput>, JsonRejection>) -> Result<ProductInput, CoreError> {
    body.map(|Json(input)| input).map_err(|rejection| {
        debug!("rejected request body: {}", rejection);
        CoreError::BadRequest("Invalid request payload".to_string())
    })
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state.product_service.list_products().await?;
    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Product>, CoreError> {
    let product = state.product_service.get_product(product_id(id)?).await?;
    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), CoreError> {
    let product = state.product_service.create_product(payload(body)?).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> Result<Json<Product>, CoreError> {
    let id = product_id(id)?;
    let product = state
        .product_service
        .update_product(id, payload(body)?)
        .await?;
    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Value>, CoreError> {
    state.product_service.delete_product(product_id(id)?).await?;
    Ok(Json(json!({ "result": "success" })))
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, CoreError> {
    state.product_service.health().await?;
    Ok(Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })))
}
