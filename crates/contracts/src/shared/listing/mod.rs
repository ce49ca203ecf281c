//! Состояние списков (пагинация, поиск, сортировка, фильтры), синхронизированное с URL.
//!
//! URL является единственным источником истины: состояние выводится из query string
//! функцией [`derive_state`], а изменения применяются через [`QueryUpdate`] и
//! коммитятся заменой текущей записи истории (без push).

pub mod apply;
pub mod dto;
pub mod manager;
pub mod query_params;
pub mod state;
pub mod update;
pub mod url_access;

pub use apply::{apply_listing, ListingRecord};
pub use dto::{total_pages, ListResponse};
pub use manager::{commit_updates, ListingQueryManager};
pub use query_params::QueryParams;
pub use state::*;
pub use update::{apply_all, QueryUpdate};
pub use url_access::{MemoryHistory, UrlAccess};
