pub mod api_utils;
pub mod components;
pub mod debounce;
pub mod icons;
pub mod list_utils;
pub mod listing_query;
pub mod ticket_gate;
