use contracts::domain::a001_sales_order::dto::SalesOrderDto;
use contracts::shared::listing::{ListResponse, ListingQueryState};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

const API_BASE: &str = "/api/sales_orders";

/// Путь запроса страницы списка; параметры те же, что в адресной строке
pub fn list_path(state: &ListingQueryState) -> String {
    format!(
        "{}/list?{}",
        API_BASE,
        state.to_query_params().to_query_string()
    )
}

/// Получить страницу заказов по состоянию списка
pub async fn fetch_sales_orders(
    state: ListingQueryState,
) -> Result<ListResponse<SalesOrderDto>, String> {
    let url = api_url(&list_path(&state));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<ListResponse<SalesOrderDto>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_sales_order::dto::listing_config;
    use contracts::shared::listing::{derive_state, QueryParams};

    #[test]
    fn test_list_path_mirrors_url_state() {
        let params = QueryParams::parse("page=3&sortBy=amount&sortOrder=desc&region=%D0%AE%D0%B3&utm=x");
        let state = derive_state(&params, &listing_config(), None);
        let path = list_path(&state);

        assert!(path.starts_with("/api/sales_orders/list?"));
        let sent = QueryParams::parse(path.split_once('?').map(|(_, q)| q).unwrap_or_default());
        assert_eq!(sent.get("page"), Some("3"));
        assert_eq!(sent.get("limit"), Some("20"));
        assert_eq!(sent.get("sortBy"), Some("amount"));
        assert_eq!(sent.get("sortOrder"), Some("desc"));
        assert_eq!(sent.get("region"), Some("Юг"));
        // Чужие параметры страницы на backend не уходят
        assert!(!sent.contains("utm"));
    }

    #[test]
    fn test_first_page_omits_page_param() {
        let state = derive_state(&QueryParams::parse(""), &listing_config(), None);
        assert_eq!(list_path(&state), "/api/sales_orders/list?limit=20");
    }
}
