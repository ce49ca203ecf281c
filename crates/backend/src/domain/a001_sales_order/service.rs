use super::repository;
use contracts::domain::a001_sales_order::dto::SalesOrderDto;
use contracts::shared::listing::{apply_listing, ListResponse, ListingQueryState};

/// Страница заказов с учётом поиска, фильтров и сортировки
pub fn list_paginated(state: &ListingQueryState) -> anyhow::Result<ListResponse<SalesOrderDto>> {
    let orders = repository::list_all()?;
    let response = apply_listing(&orders, state);
    tracing::debug!(
        "sales orders: page={} limit={} q='{}' -> {} of {}",
        state.page,
        state.limit,
        state.q,
        response.items.len(),
        response.total_count
    );
    Ok(response)
}

pub fn get_by_id(id: &str) -> anyhow::Result<Option<SalesOrderDto>> {
    repository::get_by_id(id)
}
