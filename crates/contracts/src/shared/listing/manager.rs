use std::cell::RefCell;

use super::state::{derive_state, ListingQueryConfig, ListingQueryState};
use super::update::{apply_all, QueryUpdate};
use super::url_access::UrlAccess;

/// Применяет изменения к текущему URL и коммитит результат одной заменой истории.
///
/// Возвращает новую query string. Если она совпадает с текущей, навигации нет.
pub fn commit_updates<U: UrlAccess + ?Sized>(url: &U, updates: &[QueryUpdate]) -> String {
    let current = url.get_all_params();
    let next = apply_all(updates, &current).to_query_string();
    if next != current.to_query_string() {
        url.replace(&url.current_path(), &next);
    }
    next
}

/// Состояние списка поверх `UrlAccess`: чтение выводится из URL при каждом вызове,
/// каждое изменение синхронно заменяет URL.
pub struct ListingQueryManager<U: UrlAccess> {
    url: U,
    config: ListingQueryConfig,
    last: RefCell<Option<ListingQueryState>>,
}

impl<U: UrlAccess> ListingQueryManager<U> {
    pub fn new(url: U, config: ListingQueryConfig) -> Self {
        Self {
            url,
            config,
            last: RefCell::new(None),
        }
    }

    pub fn config(&self) -> &ListingQueryConfig {
        &self.config
    }

    pub fn url(&self) -> &U {
        &self.url
    }

    pub fn state(&self) -> ListingQueryState {
        let query = self.url.get_all_params();
        let mut last = self.last.borrow_mut();
        let state = derive_state(&query, &self.config, last.as_ref());
        *last = Some(state.clone());
        state
    }

    /// Все setter'ы возвращают query string после коммита
    pub fn set_page(&self, page: u32) -> String {
        self.batch(&[QueryUpdate::Page(page)])
    }

    pub fn set_limit(&self, limit: u32) -> String {
        self.batch(&[QueryUpdate::Limit(limit)])
    }

    pub fn set_q(&self, value: Option<&str>) -> String {
        self.batch(&[QueryUpdate::Query(value.map(str::to_string))])
    }

    pub fn set_sort(&self, by: Option<&str>, order: Option<&str>) -> String {
        self.batch(&[QueryUpdate::sort(by, order)])
    }

    pub fn set_filters(&self, values: Vec<(String, Option<String>)>, reset_page: bool) -> String {
        self.batch(&[QueryUpdate::Filters { values, reset_page }])
    }

    /// Пересобирает полный набор фильтров из текущего URL с одним заменённым ключом
    pub fn set_filter(&self, key: &str, value: Option<&str>) -> String {
        let filters = self.state().filters.with_value(key, value.unwrap_or_default());
        let values = filters
            .iter()
            .map(|(k, v)| (k.to_string(), Some(v.to_string())))
            .collect();
        self.set_filters(values, true)
    }

    pub fn clear_filters(&self) -> String {
        self.batch(&[QueryUpdate::ClearFilters])
    }

    /// Несколько изменений одной навигацией
    pub fn batch(&self, updates: &[QueryUpdate]) -> String {
        commit_updates(&self.url, updates)
    }
}
