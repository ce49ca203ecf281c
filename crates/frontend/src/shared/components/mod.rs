pub mod page_header;
pub mod paginated_table;
pub mod pagination_controls;
pub mod search_input;
pub mod table;
pub mod ui;
