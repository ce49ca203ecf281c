use axum::extract::{Path, RawQuery, State};
use axum::Json;
use contracts::domain::a001_sales_order::dto::{SalesOrderDto, FILTER_KEYS};
use contracts::shared::listing::ListResponse;

use crate::domain::a001_sales_order;
use crate::shared::error::ApiError;
use crate::shared::listing::{parse_listing_query, server_config};
use crate::AppState;

/// Handler для получения страницы заказов.
///
/// Параметры те же, что у URL страницы списка во frontend:
/// `page`, `limit`, `q`, `sortBy`, `sortOrder` и ключи фильтров.
pub async fn list_paginated(
    State(app): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Json<ListResponse<SalesOrderDto>>, ApiError> {
    let config = server_config(&FILTER_KEYS, &app.config.listing);
    let state = parse_listing_query(raw.as_deref(), &config, &app.config.listing);
    let response = a001_sales_order::service::list_paginated(&state)?;
    Ok(Json(response))
}

pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<SalesOrderDto>, ApiError> {
    a001_sales_order::service::get_by_id(&id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("sales order {}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::{Config, ListingConfig, ServerConfig};
    use std::sync::Arc;

    fn app_state(max_limit: u32) -> AppState {
        AppState {
            config: Arc::new(Config {
                server: ServerConfig {
                    host: "127.0.0.1".into(),
                    port: 0,
                    static_dir: "dist".into(),
                },
                listing: ListingConfig {
                    default_limit: 20,
                    max_limit,
                },
            }),
        }
    }

    async fn list(query: Option<&str>, max_limit: u32) -> ListResponse<SalesOrderDto> {
        let Json(response) = list_paginated(
            State(app_state(max_limit)),
            RawQuery(query.map(str::to_string)),
        )
        .await
        .unwrap();
        response
    }

    #[tokio::test]
    async fn test_default_page() {
        let response = list(None, 500).await;
        assert_eq!(response.items.len(), 20);
        assert_eq!(response.total_count as usize, a001_sales_order::repository::count());
        assert_eq!(response.items[0].order_no, "SO-00001");
    }

    #[tokio::test]
    async fn test_filters_sort_and_page() {
        let response = list(
            Some("status=shipped&region=%D0%AE%D0%B3&sortBy=amount&sortOrder=desc&limit=5&page=2"),
            500,
        )
        .await;
        assert!(response.total_count > 5);
        assert!(response.items.len() <= 5);
        for order in &response.items {
            assert_eq!(order.status.as_str(), "shipped");
            assert_eq!(order.region, "Юг");
        }
        let amounts: Vec<f64> = response.items.iter().map(|o| o.amount).collect();
        assert!(amounts.windows(2).all(|w| w[0] >= w[1]));
    }

    #[tokio::test]
    async fn test_limit_clamped_by_config() {
        let response = list(Some("limit=1000"), 50).await;
        assert_eq!(response.items.len(), 50);
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let result = get_by_id(Path("missing".to_string())).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }
}
