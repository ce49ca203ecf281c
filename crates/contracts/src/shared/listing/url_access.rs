use std::cell::RefCell;

use super::query_params::QueryParams;

/// Доступ к текущему URL и навигация с заменой записи истории.
///
/// Реализации: `MemoryHistory` (тесты, хосты без браузера) и браузерный адаптер во frontend.
pub trait UrlAccess {
    fn current_path(&self) -> String;

    /// Query string без ведущего `?`
    fn current_query(&self) -> String;

    /// Заменяет текущую запись истории; новых записей не создаёт
    fn replace(&self, path: &str, query: &str);

    fn get_param(&self, name: &str) -> Option<String> {
        self.get_all_params().get(name).map(str::to_string)
    }

    fn get_all_params(&self) -> QueryParams {
        QueryParams::parse(&self.current_query())
    }
}

impl<T: UrlAccess + ?Sized> UrlAccess for &T {
    fn current_path(&self) -> String {
        (**self).current_path()
    }

    fn current_query(&self) -> String {
        (**self).current_query()
    }

    fn replace(&self, path: &str, query: &str) {
        (**self).replace(path, query)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct HistoryEntry {
    path: String,
    query: String,
}

#[derive(Debug)]
struct HistoryInner {
    entries: Vec<HistoryEntry>,
    index: usize,
    replace_count: usize,
}

/// История навигации в памяти
#[derive(Debug)]
pub struct MemoryHistory {
    inner: RefCell<HistoryInner>,
}

impl MemoryHistory {
    /// `url` вида `/path?query`
    pub fn new(url: &str) -> Self {
        Self {
            inner: RefCell::new(HistoryInner {
                entries: vec![split_url(url)],
                index: 0,
                replace_count: 0,
            }),
        }
    }

    /// Обычный переход (новая запись); хвост forward-истории отбрасывается
    pub fn push(&self, url: &str) {
        let mut inner = self.inner.borrow_mut();
        let keep = inner.index + 1;
        inner.entries.truncate(keep);
        inner.entries.push(split_url(url));
        inner.index = keep;
    }

    pub fn back(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.index == 0 {
            return false;
        }
        inner.index -= 1;
        true
    }

    pub fn forward(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.index + 1 >= inner.entries.len() {
            return false;
        }
        inner.index += 1;
        true
    }

    /// Количество записей истории
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }

    /// Сколько раз вызывался `replace`
    pub fn replace_count(&self) -> usize {
        self.inner.borrow().replace_count
    }

    pub fn current_url(&self) -> String {
        let inner = self.inner.borrow();
        let entry = &inner.entries[inner.index];
        if entry.query.is_empty() {
            entry.path.clone()
        } else {
            format!("{}?{}", entry.path, entry.query)
        }
    }
}

fn split_url(url: &str) -> HistoryEntry {
    match url.split_once('?') {
        Some((path, query)) => HistoryEntry {
            path: path.to_string(),
            query: query.to_string(),
        },
        None => HistoryEntry {
            path: url.to_string(),
            query: String::new(),
        },
    }
}

impl UrlAccess for MemoryHistory {
    fn current_path(&self) -> String {
        let inner = self.inner.borrow();
        inner.entries[inner.index].path.clone()
    }

    fn current_query(&self) -> String {
        let inner = self.inner.borrow();
        inner.entries[inner.index].query.clone()
    }

    fn replace(&self, path: &str, query: &str) {
        let mut inner = self.inner.borrow_mut();
        let index = inner.index;
        inner.entries[index] = HistoryEntry {
            path: path.to_string(),
            query: query.trim_start_matches('?').to_string(),
        };
        inner.replace_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_rewrites_current_entry_only() {
        let history = MemoryHistory::new("/orders?page=2");
        history.replace("/orders", "page=3");
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_url(), "/orders?page=3");
        assert_eq!(history.replace_count(), 1);
    }

    #[test]
    fn test_push_back_forward() {
        let history = MemoryHistory::new("/orders");
        history.push("/orders?status=open");
        history.push("/invoices");
        assert_eq!(history.len(), 3);

        assert!(history.back());
        assert_eq!(history.current_url(), "/orders?status=open");
        assert!(history.back());
        assert!(!history.back());
        assert!(history.forward());
        assert_eq!(history.get_param("status").as_deref(), Some("open"));

        history.push("/shipments");
        assert_eq!(history.len(), 3);
        assert!(!history.forward());
    }

    #[test]
    fn test_default_param_accessors() {
        let history = MemoryHistory::new("/stock?q=panel&limit=10");
        assert_eq!(history.current_path(), "/stock");
        assert_eq!(history.get_param("q").as_deref(), Some("panel"));
        assert_eq!(history.get_param("page"), None);
        assert_eq!(history.get_all_params().len(), 2);
    }
}
