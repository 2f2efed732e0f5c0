//! 应用层

pub mod product;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::core::middleware::request_logging_middleware;
use product::handler::{self, AppState};
use product::{ProductService, ProductStore};

/// 组装路由
pub fn build_router(store: Arc<dyn ProductStore>) -> Router {
    let state = AppState {
        product_service: ProductService::new(store),
    };

    Router::new()
        .route("/health", get(handler::health_check))
        .route("/products", get(handler::list_products))
        .route("/product", post(handler::create_product))
        .route(
            "/product/:id",
            get(handler::get_product)
                .put(handler::update_product)
                .delete(handler::delete_product),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_logging_middleware)),
        )
        .with_state(state)
}
