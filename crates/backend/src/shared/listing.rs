//! Разбор состояния списка из query string запроса.
//!
//! Используется та же функция `derive_state`, что и во frontend, поэтому
//! умолчания и обработка некорректных значений совпадают.

use contracts::shared::listing::{derive_state, ListingQueryConfig, ListingQueryState, QueryParams};

use crate::shared::config::ListingConfig;

/// Конфиг списка с размером страницы по умолчанию из настроек сервера
pub fn server_config(filter_keys: &[&str], settings: &ListingConfig) -> ListingQueryConfig {
    ListingQueryConfig::new(settings.default_limit, filter_keys.iter().copied())
}

/// Состояние из сырой query string; `limit` ограничивается `max_limit`
pub fn parse_listing_query(
    raw: Option<&str>,
    config: &ListingQueryConfig,
    settings: &ListingConfig,
) -> ListingQueryState {
    let params = QueryParams::parse(raw.unwrap_or_default());
    let mut state = derive_state(&params, config, None);
    if state.limit > settings.max_limit {
        tracing::debug!(
            "limit {} exceeds max_limit {}, clamping",
            state.limit,
            settings.max_limit
        );
        state.limit = settings.max_limit.max(1);
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ListingConfig {
        ListingConfig {
            default_limit: 20,
            max_limit: 100,
        }
    }

    #[test]
    fn test_missing_query_uses_defaults() {
        let config = server_config(&["status"], &settings());
        let state = parse_listing_query(None, &config, &settings());
        assert_eq!(state.page, 1);
        assert_eq!(state.limit, 20);
        assert_eq!(state.filters.get("status"), Some(""));
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let config = server_config(&["status"], &settings());
        let state = parse_listing_query(Some("page=x&limit=-1&status=open"), &config, &settings());
        assert_eq!(state.page, 1);
        assert_eq!(state.limit, 20);
        assert_eq!(state.filters.get("status"), Some("open"));
    }

    #[test]
    fn test_limit_is_clamped() {
        let config = server_config(&[], &settings());
        let state = parse_listing_query(Some("limit=100000&page=3"), &config, &settings());
        assert_eq!(state.limit, 100);
        assert_eq!(state.page, 3);
    }
}
