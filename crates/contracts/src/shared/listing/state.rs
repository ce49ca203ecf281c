use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::query_params::QueryParams;

pub const PARAM_PAGE: &str = "page";
pub const PARAM_LIMIT: &str = "limit";
pub const PARAM_Q: &str = "q";
pub const PARAM_SORT_BY: &str = "sortBy";
pub const PARAM_SORT_ORDER: &str = "sortOrder";

pub const DEFAULT_SORT_ORDER: &str = "asc";

/// Настройки списка: размер страницы по умолчанию и набор ключей фильтров
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQueryConfig {
    pub default_limit: u32,
    #[serde(default)]
    pub filter_keys: Vec<String>,
}

impl ListingQueryConfig {
    pub fn new<I, S>(default_limit: u32, filter_keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            default_limit: default_limit.max(1),
            filter_keys: filter_keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_filter_key(&self, key: &str) -> bool {
        self.filter_keys.iter().any(|k| k == key)
    }
}

/// Значения фильтров колонок в порядке объявления ключей
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingFilters {
    entries: Vec<(String, String)>,
}

impl ListingFilters {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Количество непустых фильтров (для бейджа на панели фильтров)
    pub fn active_count(&self) -> usize {
        self.entries.iter().filter(|(_, v)| !v.is_empty()).count()
    }

    /// Копия с одним заменённым значением; неизвестный ключ добавляется в конец
    pub fn with_value(&self, key: &str, value: &str) -> Self {
        let mut entries = self.entries.clone();
        match entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => entries.push((key.to_string(), value.to_string())),
        }
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ListingFilters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Состояние списка, целиком выведенное из URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQueryState {
    pub page: u32,
    pub limit: u32,
    pub q: String,
    pub sort_by: Option<String>,
    /// Регистр сохраняется как в URL
    pub sort_order: String,
    pub filters: Arc<ListingFilters>,
}

impl ListingQueryState {
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }

    pub fn is_descending(&self) -> bool {
        self.sort_order.eq_ignore_ascii_case("desc")
    }

    /// Каноническая query string для запроса к backend: page не пишется, если равен 1,
    /// пустые значения опускаются.
    pub fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if self.page > 1 {
            params.set(PARAM_PAGE, self.page.to_string());
        }
        params.set(PARAM_LIMIT, self.limit.to_string());
        params.set_or_remove(PARAM_Q, Some(&self.q));
        params.set_or_remove(PARAM_SORT_BY, self.sort_by.as_deref());
        if self.sort_by.is_some() {
            params.set(PARAM_SORT_ORDER, self.sort_order.as_str());
        }
        for (key, value) in self.filters.iter() {
            params.set_or_remove(key, Some(value));
        }
        params
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|v| *v > 0)
}

/// Чистая функция: URL → состояние списка.
///
/// Отсутствующие и некорректные значения молча заменяются значениями по умолчанию.
/// Если передано предыдущее состояние и фильтры не изменились, переиспользуется
/// тот же `Arc`, чтобы потребители могли сравнивать фильтры по указателю.
pub fn derive_state(
    query: &QueryParams,
    config: &ListingQueryConfig,
    previous: Option<&ListingQueryState>,
) -> ListingQueryState {
    let filters: ListingFilters = config
        .filter_keys
        .iter()
        .map(|key| (key.clone(), query.get(key).unwrap_or_default().to_string()))
        .collect();

    let filters = match previous {
        Some(prev) if *prev.filters == filters => Arc::clone(&prev.filters),
        _ => Arc::new(filters),
    };

    ListingQueryState {
        page: parse_positive(query.get(PARAM_PAGE)).unwrap_or(1),
        limit: parse_positive(query.get(PARAM_LIMIT)).unwrap_or(config.default_limit),
        q: query.get(PARAM_Q).unwrap_or_default().to_string(),
        sort_by: query.get(PARAM_SORT_BY).map(str::to_string),
        sort_order: query
            .get(PARAM_SORT_ORDER)
            .unwrap_or(DEFAULT_SORT_ORDER)
            .to_string(),
        filters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ListingQueryConfig {
        ListingQueryConfig::new(25, ["status", "region"])
    }

    fn derive(raw: &str) -> ListingQueryState {
        derive_state(&QueryParams::parse(raw), &config(), None)
    }

    #[test]
    fn test_page_defaults_to_one() {
        for raw in ["", "page=", "page=abc", "page=0", "page=-2", "page=1.5", "page=3x"] {
            assert_eq!(derive(raw).page, 1, "raw query: {raw}");
        }
        assert_eq!(derive("page=7").page, 7);
        assert_eq!(derive("page=%204").page, 4);
    }

    #[test]
    fn test_limit_defaults_to_config() {
        for raw in ["", "limit=", "limit=many", "limit=0", "limit=-10"] {
            assert_eq!(derive(raw).limit, 25, "raw query: {raw}");
        }
        assert_eq!(derive("limit=100").limit, 100);
    }

    #[test]
    fn test_text_and_sort_defaults() {
        let state = derive("");
        assert_eq!(state.q, "");
        assert_eq!(state.sort_by, None);
        assert_eq!(state.sort_order, "asc");

        let state = derive("q=inverter&sortBy=amount&sortOrder=DESC");
        assert_eq!(state.q, "inverter");
        assert_eq!(state.sort_by.as_deref(), Some("amount"));
        assert_eq!(state.sort_order, "DESC");
        assert!(state.is_descending());
    }

    #[test]
    fn test_filters_only_contain_declared_keys() {
        let state = derive("status=active&owner=bob");
        assert_eq!(state.filters.len(), 2);
        assert_eq!(state.filters.get("status"), Some("active"));
        assert_eq!(state.filters.get("region"), Some(""));
        assert_eq!(state.filters.get("owner"), None);
        assert_eq!(state.filters.active_count(), 1);
        let keys: Vec<&str> = state.filters.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["status", "region"]);
    }

    #[test]
    fn test_filters_identity_reused_when_unchanged() {
        let cfg = config();
        let query = QueryParams::parse("status=active&page=2");
        let first = derive_state(&query, &cfg, None);

        let same = derive_state(&query, &cfg, Some(&first));
        assert!(Arc::ptr_eq(&first.filters, &same.filters));

        // Смена страницы не трогает фильтры
        let paged = derive_state(&QueryParams::parse("status=active&page=3"), &cfg, Some(&same));
        assert!(Arc::ptr_eq(&first.filters, &paged.filters));

        let changed = derive_state(&QueryParams::parse("status=closed"), &cfg, Some(&paged));
        assert!(!Arc::ptr_eq(&first.filters, &changed.filters));
        assert_eq!(changed.filters.get("status"), Some("closed"));
    }

    #[test]
    fn test_offset_and_canonical_query() {
        let state = derive("page=3&limit=20&q=&status=active&sortBy=name");
        assert_eq!(state.offset(), 40);
        assert_eq!(
            state.to_query_params().to_query_string(),
            "page=3&limit=20&sortBy=name&sortOrder=asc&status=active"
        );

        let first_page = derive("");
        assert_eq!(first_page.offset(), 0);
        assert_eq!(first_page.to_query_params().to_query_string(), "limit=25");
    }

    #[test]
    fn test_zero_default_limit_is_clamped() {
        let cfg = ListingQueryConfig::new(0, Vec::<String>::new());
        assert_eq!(cfg.default_limit, 1);
    }

    #[test]
    fn test_with_value_replaces_one_key() {
        let filters: ListingFilters = [("status", "active"), ("region", "north")].into_iter().collect();
        let updated = filters.with_value("region", "");
        assert_eq!(updated.get("status"), Some("active"));
        assert_eq!(updated.get("region"), Some(""));
        assert_eq!(filters.get("region"), Some("north"));
    }
}
