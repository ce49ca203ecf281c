//! Изменения состояния списка, выраженные как операции над query string.
//!
//! Каждая операция клонирует *текущие* параметры URL и меняет только свои ключи,
//! поэтому параметры, которые список не объявлял, не затираются.

use super::query_params::QueryParams;
use super::state::{PARAM_LIMIT, PARAM_PAGE, PARAM_Q, PARAM_SORT_BY, PARAM_SORT_ORDER};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryUpdate {
    /// Страница; значения `<= 1` удаляют параметр
    Page(u32),
    /// Размер страницы; сбрасывает страницу
    Limit(u32),
    /// Строка поиска; сбрасывает страницу
    Query(Option<String>),
    Sort {
        by: Option<String>,
        order: Option<String>,
    },
    Filters {
        values: Vec<(String, Option<String>)>,
        reset_page: bool,
    },
    /// Оставляет только limit, q, sortBy, sortOrder
    ClearFilters,
}

impl QueryUpdate {
    pub fn page(page: u32) -> Self {
        Self::Page(page)
    }

    pub fn limit(limit: u32) -> Self {
        Self::Limit(limit)
    }

    pub fn query(value: impl Into<String>) -> Self {
        Self::Query(Some(value.into()))
    }

    pub fn sort(by: Option<&str>, order: Option<&str>) -> Self {
        Self::Sort {
            by: by.map(str::to_string),
            order: order.map(str::to_string),
        }
    }

    /// Фильтры с непустыми строками; пустая строка удаляет ключ
    pub fn filters<I, K, V>(values: I, reset_page: bool) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Filters {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
            reset_page,
        }
    }

    pub fn apply(&self, current: &QueryParams) -> QueryParams {
        let mut next = current.clone();
        match self {
            Self::Page(page) => {
                if *page <= 1 {
                    next.remove(PARAM_PAGE);
                } else {
                    next.set(PARAM_PAGE, page.to_string());
                }
            }
            Self::Limit(limit) => {
                next.set(PARAM_LIMIT, limit.to_string());
                next.remove(PARAM_PAGE);
            }
            Self::Query(value) => {
                next.set_or_remove(PARAM_Q, value.as_deref());
                next.remove(PARAM_PAGE);
            }
            Self::Sort { by, order } => {
                next.set_or_remove(PARAM_SORT_BY, by.as_deref());
                next.set_or_remove(PARAM_SORT_ORDER, order.as_deref());
            }
            Self::Filters { values, reset_page } => {
                for (key, value) in values {
                    next.set_or_remove(key, value.as_deref());
                }
                if *reset_page {
                    next.remove(PARAM_PAGE);
                }
            }
            Self::ClearFilters => {
                next = QueryParams::new();
                for name in [PARAM_LIMIT, PARAM_Q, PARAM_SORT_BY, PARAM_SORT_ORDER] {
                    next.set_or_remove(name, current.get(name));
                }
            }
        }
        next
    }
}

/// Применяет пачку изменений к одному снимку URL; результат коммитится одной навигацией
pub fn apply_all<'a, I>(updates: I, current: &QueryParams) -> QueryParams
where
    I: IntoIterator<Item = &'a QueryUpdate>,
{
    updates
        .into_iter()
        .fold(current.clone(), |params, update| update.apply(&params))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(update: QueryUpdate, raw: &str) -> String {
        update.apply(&QueryParams::parse(raw)).to_query_string()
    }

    #[test]
    fn test_page_one_is_canonical() {
        assert_eq!(apply(QueryUpdate::page(1), "page=4&q=x"), "q=x");
        assert_eq!(apply(QueryUpdate::page(0), "page=4"), "");
        assert_eq!(apply(QueryUpdate::page(3), "q=x"), "q=x&page=3");
        assert_eq!(apply(QueryUpdate::page(5), "page=3&status=open"), "page=5&status=open");
    }

    #[test]
    fn test_limit_resets_page_only() {
        assert_eq!(
            apply(QueryUpdate::limit(50), "page=3&status=open&sortBy=name"),
            "status=open&sortBy=name&limit=50"
        );
    }

    #[test]
    fn test_query_sets_or_removes_and_resets_page() {
        assert_eq!(apply(QueryUpdate::query("inverter"), "page=2"), "q=inverter");
        assert_eq!(apply(QueryUpdate::query(""), "q=old&page=2&limit=10"), "limit=10");
        assert_eq!(apply(QueryUpdate::Query(None), "q=old"), "");
    }

    #[test]
    fn test_sort_keeps_page_and_filters() {
        assert_eq!(
            apply(QueryUpdate::sort(Some("amount"), Some("desc")), "page=2&status=open"),
            "page=2&status=open&sortBy=amount&sortOrder=desc"
        );
        assert_eq!(
            apply(QueryUpdate::sort(None, None), "sortBy=amount&sortOrder=desc&page=2"),
            "page=2"
        );
    }

    #[test]
    fn test_filters_merge_and_optional_page_reset() {
        let update = QueryUpdate::filters([("status", "open"), ("region", "")], true);
        assert_eq!(apply(update, "region=north&page=3&tab=1"), "tab=1&status=open");

        let keep_page = QueryUpdate::filters([("status", "open")], false);
        assert_eq!(apply(keep_page, "page=3"), "page=3&status=open");

        let with_none = QueryUpdate::Filters {
            values: vec![("status".to_string(), None)],
            reset_page: true,
        };
        assert_eq!(apply(with_none, "status=open&page=2"), "");
    }

    #[test]
    fn test_clear_filters_keeps_fixed_keys() {
        assert_eq!(
            apply(
                QueryUpdate::ClearFilters,
                "page=4&limit=50&q=foo&sortBy=name&sortOrder=desc&status=active"
            ),
            "limit=50&q=foo&sortBy=name&sortOrder=desc"
        );
        assert_eq!(apply(QueryUpdate::ClearFilters, "status=active&page=2"), "");
    }

    #[test]
    fn test_apply_all_composes_in_order() {
        let updates = [
            QueryUpdate::filters([("status", "open")], true),
            QueryUpdate::filters([("region", "south")], true),
            QueryUpdate::page(2),
        ];
        let next = apply_all(&updates, &QueryParams::parse("page=5"));
        assert_eq!(next.to_query_string(), "status=open&region=south&page=2");
    }
}
