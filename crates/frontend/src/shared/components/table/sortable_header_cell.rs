//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Сумма"
//!     sort_field="amount"
//!     current_sort_by=Signal::derive(move || listing.sort_by())
//!     descending=Signal::derive(move || listing.state().with(|s| s.is_descending()))
//!     on_sort=Callback::new(move |field: String| toggle_sort(field))
//!     align="right"
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Поле для сортировки (значение `sortBy` в URL)
    #[prop(into)]
    sort_field: String,

    /// Текущее поле сортировки
    #[prop(into)]
    current_sort_by: Signal<Option<String>>,

    /// Направление сортировки
    #[prop(into)]
    descending: Signal<bool>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let sort_field = StoredValue::new(sort_field);

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell resizable=true min_width=min_width class="resizable">
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(sort_field.get_value())
            >
                {label}
                <span class=move || {
                    sort_field.with_value(|field| get_sort_class(current_sort_by.get().as_deref(), field))
                }>
                    {move || {
                        sort_field.with_value(|field| {
                            get_sort_indicator(current_sort_by.get().as_deref(), field, descending.get())
                        })
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}
