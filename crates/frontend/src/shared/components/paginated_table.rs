//! Таблица с серверной пагинацией поверх состояния списка из URL.
//!
//! Таблица не хранит своего состояния страницы/сортировки: всё читается из
//! `ListingQueryHandle`, а клики по заголовкам и пагинации вызывают его setter'ы.
//! При каждом изменении состояния вызывается `fetch`; ответы устаревших запросов
//! отбрасываются.

use std::future::Future;
use std::sync::Arc;

use contracts::shared::listing::{total_pages, ListResponse, ListingQueryState};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::pagination_controls::{PaginationControls, DEFAULT_PAGE_SIZE_OPTIONS};
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::list_utils::next_sort;
use crate::shared::listing_query::ListingQueryHandle;
use crate::shared::ticket_gate::TicketGate;

type CellRenderer<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

/// Описание колонки таблицы
pub struct TableColumn<T> {
    pub title: &'static str,
    /// Значение `sortBy`; `None`, если колонка без сортировки
    pub sort_field: Option<&'static str>,
    pub min_width: f64,
    pub align: &'static str,
    pub render: CellRenderer<T>,
}

impl<T> Clone for TableColumn<T> {
    fn clone(&self) -> Self {
        Self {
            title: self.title,
            sort_field: self.sort_field,
            min_width: self.min_width,
            align: self.align,
            render: Arc::clone(&self.render),
        }
    }
}

impl<T> TableColumn<T> {
    pub fn new(title: &'static str, render: impl Fn(&T) -> AnyView + Send + Sync + 'static) -> Self {
        Self {
            title,
            sort_field: None,
            min_width: 100.0,
            align: "left",
            render: Arc::new(render),
        }
    }

    pub fn sortable(mut self, field: &'static str) -> Self {
        self.sort_field = Some(field);
        self
    }

    pub fn min_width(mut self, min_width: f64) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn align_right(mut self) -> Self {
        self.align = "right";
        self
    }
}

#[component]
pub fn PaginatedTable<T, F, Fut>(
    /// Состояние списка из URL
    listing: ListingQueryHandle,
    columns: Vec<TableColumn<T>>,
    /// Загрузка страницы данных по текущему состоянию
    fetch: F,
    #[prop(optional)] page_size_options: Option<Vec<u32>>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    F: Fn(ListingQueryState) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<ListResponse<T>, String>> + 'static,
{
    let (rows, set_rows) = signal(Vec::<T>::new());
    let (total_count, set_total_count) = signal(0u64);
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let fetch = StoredValue::new(fetch);
    let columns = StoredValue::new(columns);
    let latest_request = StoredValue::new(TicketGate::default());

    let state = listing.state();
    let page_size_options =
        page_size_options.unwrap_or_else(|| DEFAULT_PAGE_SIZE_OPTIONS.to_vec());

    Effect::new(move |_| {
        let current = state.get();
        set_is_loading.set(true);
        set_error.set(None);

        let mut ticket = 0;
        latest_request.update_value(|gate| ticket = gate.arm());

        let request = fetch.with_value(|f| f(current));
        leptos::task::spawn_local(async move {
            let result = request.await;
            let is_latest = latest_request
                .try_with_value(|gate| gate.is_current(ticket))
                .unwrap_or(false);
            if !is_latest {
                return;
            }
            match result {
                Ok(response) => {
                    set_total_count.set(response.total_count);
                    set_rows.set(response.items);
                }
                Err(e) => {
                    log::warn!("listing fetch failed: {}", e);
                    set_rows.set(Vec::new());
                    set_total_count.set(0);
                    set_error.set(Some(e));
                }
            }
            set_is_loading.set(false);
        });
    });

    let on_sort = Callback::new(move |field: String| {
        let (by, order) = state.with_untracked(|s| next_sort(s.sort_by.as_deref(), &s.sort_order, &field));
        listing.set_sort(Some(&by), Some(order));
    });

    let header = move || {
        columns.with_value(|cols| {
            cols.iter()
                .map(|col| match col.sort_field {
                    Some(field) => view! {
                        <SortableHeaderCell
                            label=col.title
                            sort_field=field
                            current_sort_by=Signal::derive(move || state.with(|s| s.sort_by.clone()))
                            descending=Signal::derive(move || state.with(|s| s.is_descending()))
                            on_sort=on_sort
                            min_width=col.min_width
                            align=col.align
                        />
                    }
                    .into_any(),
                    None => {
                        let title = col.title;
                        view! {
                            <TableHeaderCell resizable=true min_width=col.min_width class="resizable">
                                {title}
                            </TableHeaderCell>
                        }
                        .into_any()
                    }
                })
                .collect_view()
        })
    };

    let body = move || {
        let items = rows.get();
        let column_count = columns.with_value(|cols| cols.len());
        if items.is_empty() {
            let message = if is_loading.get() { "Загрузка..." } else { "Нет данных" };
            return view! {
                <TableRow>
                    <TableCell attr:colspan=column_count.to_string()>
                        <TableCellLayout>
                            <span class="table__empty">{message}</span>
                        </TableCellLayout>
                    </TableCell>
                </TableRow>
            }
            .into_any();
        }

        columns.with_value(|cols| {
            items
                .into_iter()
                .map(|row| {
                    let cells = cols
                        .iter()
                        .map(|col| {
                            let class = if col.align == "right" { "table__cell--right" } else { "" };
                            let cell = (col.render)(&row);
                            view! {
                                <TableCell class=class>
                                    <TableCellLayout truncate=true>{cell}</TableCellLayout>
                                </TableCell>
                            }
                        })
                        .collect_view();
                    view! { <TableRow>{cells}</TableRow> }
                })
                .collect_view()
                .into_any()
        })
    };

    view! {
        <div class="paginated-table">
            <div class="paginated-table__toolbar">
                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page))
                    total_pages=Signal::derive(move || {
                        total_pages(total_count.get(), state.with(|s| s.limit))
                    })
                    total_count=Signal::derive(move || total_count.get())
                    page_size=Signal::derive(move || state.with(|s| s.limit))
                    on_page_change=Callback::new(move |page: u32| listing.set_page(page))
                    on_page_size_change=Callback::new(move |size: u32| listing.set_limit(size))
                    page_size_options=page_size_options
                />
                <Show when=move || is_loading.get()>
                    <Spinner size=SpinnerSize::Tiny />
                </Show>
            </div>

            {move || {
                error.get().map(|e| view! {
                    <div class="alert alert--error">
                        {format!("Ошибка: {}", e)}
                    </div>
                })
            }}

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>{header}</TableRow>
                    </TableHeader>
                    <TableBody>{body}</TableBody>
                </Table>
            </div>
        </div>
    }
}
