use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A001 SALES ORDERS
        // ========================================
        .route(
            "/api/sales_orders/list",
            get(handlers::a001_sales_order::list_paginated),
        )
        .route(
            "/api/sales_orders/:id",
            get(handlers::a001_sales_order::get_by_id),
        )
}
