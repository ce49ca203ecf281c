//! Состояние страницы списка, синхронизированное с query string браузера.
//!
//! ```ignore
//! let listing = use_listing_query_state(ListingQueryConfig::new(20, ["status", "region"]));
//!
//! // чтение (реактивно)
//! let page = move || listing.page();
//!
//! // запись: URL заменяется через history.replaceState
//! listing.set_filter("status", Some("shipped"));
//! ```

mod browser;
mod hook;

pub use browser::BrowserUrl;
pub use hook::{use_listing_query_state, ListingQueryHandle};
