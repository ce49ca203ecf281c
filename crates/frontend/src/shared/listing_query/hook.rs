use std::sync::Arc;

use contracts::shared::listing::{
    derive_state, ListingFilters, ListingQueryConfig, ListingQueryManager, ListingQueryState,
    QueryParams, QueryUpdate, UrlAccess,
};
use leptos::prelude::*;

use super::browser::BrowserUrl;

/// Реактивная обёртка над `ListingQueryManager`.
///
/// Все изменения URL делает менеджер; `search` зеркалит query string после коммита,
/// а `state` выводится из неё через `Memo`, поэтому потребители перезапускаются
/// только при реальном изменении URL.
pub struct ListingQueryHandle<U: UrlAccess + 'static = BrowserUrl> {
    search: RwSignal<String>,
    manager: StoredValue<ListingQueryManager<U>, LocalStorage>,
    state: Memo<ListingQueryState>,
}

impl<U: UrlAccess + 'static> Clone for ListingQueryHandle<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: UrlAccess + 'static> Copy for ListingQueryHandle<U> {}

/// Состояние списка поверх адресной строки браузера
pub fn use_listing_query_state(config: ListingQueryConfig) -> ListingQueryHandle {
    let handle = ListingQueryHandle::new(BrowserUrl, config);

    // Назад/вперёд в браузере меняет URL без наших setter'ов
    let popstate = window_event_listener(leptos::ev::popstate, move |_| handle.sync_from_url());
    on_cleanup(move || popstate.remove());

    handle
}

impl<U: UrlAccess + 'static> ListingQueryHandle<U> {
    pub fn new(url: U, config: ListingQueryConfig) -> Self {
        let search = RwSignal::new(url.current_query());
        let derive_config = config.clone();
        let manager = StoredValue::new_local(ListingQueryManager::new(url, config));

        let state = Memo::new(move |previous: Option<&ListingQueryState>| {
            let params = QueryParams::parse(&search.get());
            derive_state(&params, &derive_config, previous)
        });

        Self {
            search,
            manager,
            state,
        }
    }

    /// Перечитывает URL (после навигации, сделанной не через handle)
    pub fn sync_from_url(&self) {
        if let Some(query) = self.manager.try_with_value(|m| m.url().current_query()) {
            self.search.set(query);
        }
    }

    pub fn state(&self) -> Memo<ListingQueryState> {
        self.state
    }

    pub fn page(&self) -> u32 {
        self.state.with(|s| s.page)
    }

    pub fn limit(&self) -> u32 {
        self.state.with(|s| s.limit)
    }

    pub fn q(&self) -> String {
        self.state.with(|s| s.q.clone())
    }

    pub fn sort_by(&self) -> Option<String> {
        self.state.with(|s| s.sort_by.clone())
    }

    pub fn sort_order(&self) -> String {
        self.state.with(|s| s.sort_order.clone())
    }

    /// Тот же `Arc`, пока фильтры в URL не менялись
    pub fn filters(&self) -> Arc<ListingFilters> {
        self.state.with(|s| Arc::clone(&s.filters))
    }

    pub fn filter(&self, key: &str) -> String {
        self.state
            .with(|s| s.filters.get(key).unwrap_or_default().to_string())
    }

    pub fn set_page(&self, page: u32) {
        self.commit(|m| m.set_page(page));
    }

    pub fn set_limit(&self, limit: u32) {
        self.commit(|m| m.set_limit(limit));
    }

    pub fn set_q(&self, value: Option<&str>) {
        self.commit(|m| m.set_q(value));
    }

    pub fn set_sort(&self, by: Option<&str>, order: Option<&str>) {
        self.commit(|m| m.set_sort(by, order));
    }

    pub fn set_filters(&self, values: Vec<(String, Option<String>)>, reset_page: bool) {
        self.commit(|m| m.set_filters(values, reset_page));
    }

    pub fn set_filter(&self, key: &str, value: Option<&str>) {
        self.commit(|m| m.set_filter(key, value));
    }

    pub fn clear_filters(&self) {
        self.commit(|m| m.clear_filters());
    }

    /// Несколько изменений одним `replaceState`
    pub fn batch(&self, updates: &[QueryUpdate]) {
        self.commit(|m| m.batch(updates));
    }

    fn commit(&self, apply: impl FnOnce(&ListingQueryManager<U>) -> String) {
        let Some(next) = self.manager.try_with_value(apply) else {
            return;
        };
        log::debug!("listing query -> '{}'", next);
        self.search.set(next);
    }
}
