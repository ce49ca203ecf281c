//! Применение состояния списка к набору записей в памяти
//! (поиск, фильтры, сортировка, пагинация).

use std::cmp::Ordering;

use super::dto::ListResponse;
use super::state::ListingQueryState;

/// Запись, которую можно искать, фильтровать и сортировать по имени поля
pub trait ListingRecord {
    /// Подходит ли запись под строку поиска (вызывается только для непустой строки)
    fn matches_query(&self, query: &str) -> bool;

    /// Значение колонки для фильтра; `None`, если фильтра с таким ключом нет
    fn filter_value(&self, key: &str) -> Option<String>;

    /// `None` для неизвестного поля: порядок тогда не меняется
    fn compare_by_field(&self, other: &Self, field: &str) -> Option<Ordering>;
}

/// Фильтр совпадает без учёта регистра; неизвестные ключи фильтров игнорируются
fn passes_filters<T: ListingRecord>(item: &T, state: &ListingQueryState) -> bool {
    state
        .filters
        .iter()
        .filter(|(_, wanted)| !wanted.is_empty())
        .all(|(key, wanted)| match item.filter_value(key) {
            Some(actual) => actual.to_lowercase() == wanted.to_lowercase(),
            None => true,
        })
}

pub fn apply_listing<T: ListingRecord + Clone>(
    items: &[T],
    state: &ListingQueryState,
) -> ListResponse<T> {
    let query = state.q.trim().to_lowercase();
    let mut matched: Vec<&T> = items
        .iter()
        .filter(|item| query.is_empty() || item.matches_query(&query))
        .filter(|item| passes_filters(*item, state))
        .collect();

    if let Some(field) = state.sort_by.as_deref() {
        let descending = state.is_descending();
        // sort_by стабильна: равные записи сохраняют исходный порядок
        matched.sort_by(|a, b| {
            let cmp = a.compare_by_field(b, field).unwrap_or(Ordering::Equal);
            if descending {
                cmp.reverse()
            } else {
                cmp
            }
        });
    }

    let total_count = matched.len() as u64;
    let offset = usize::try_from(state.offset()).unwrap_or(usize::MAX);
    let items = matched
        .into_iter()
        .skip(offset)
        .take(state.limit as usize)
        .cloned()
        .collect();

    ListResponse { items, total_count }
}
