use crate::shared::icons::icon;
use leptos::prelude::*;

pub const DEFAULT_PAGE_SIZE_OPTIONS: [u32; 4] = [20, 50, 100, 200];

/// Страница для подписи: в URL может оказаться номер за последней страницей
pub fn display_page(current: u32, total_pages: u32) -> u32 {
    current.clamp(1, total_pages.max(1))
}

/// Куда ведёт «назад»; из-за последней страницы сразу на последнюю
pub fn previous_page(current: u32, total_pages: u32) -> Option<u32> {
    (current > 1).then(|| (current - 1).min(total_pages.max(1)))
}

/// Куда ведёт «на последнюю»; `None`, если уже там или страниц нет
pub fn last_page(current: u32, total_pages: u32) -> Option<u32> {
    (total_pages > 0 && current != total_pages).then_some(total_pages)
}

/// PaginationControls component - reusable pagination controls
///
/// Страницы нумеруются с 1, как в URL списка.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages (0 for an empty result)
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<u64>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<u32>,

    /// Callback when page changes
    on_page_change: Callback<u32>,

    /// Callback when page size changes
    on_page_size_change: Callback<u32>,

    /// Available page size options (optional, defaults to [20, 50, 100, 200])
    #[prop(optional)]
    page_size_options: Option<Vec<u32>>,
) -> impl IntoView {
    let mut page_size_opts = page_size_options.unwrap_or_else(|| DEFAULT_PAGE_SIZE_OPTIONS.to_vec());
    // Размер из URL может не входить в список, показываем его тоже
    let initial_size = page_size.get_untracked();
    if !page_size_opts.contains(&initial_size) {
        page_size_opts.push(initial_size);
        page_size_opts.sort_unstable();
    }

    let is_first = move || current_page.get() <= 1;
    let is_last = move || current_page.get() >= total_pages.get();
    let at_last = move || last_page(current_page.get(), total_pages.get()).is_none();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=is_first
                title="Первая страница"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if let Some(page) = previous_page(current_page.get(), total_pages.get()) {
                        on_page_change.run(page);
                    }
                }
                disabled=is_first
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let total = total_pages.get();
                    let page = display_page(current_page.get(), total);
                    format!("{} / {} ({})", page, total.max(1), total_count.get())
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=is_last
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if let Some(page) = last_page(current_page.get(), total_pages.get()) {
                        on_page_change.run(page);
                    }
                }
                disabled=at_last
                title="Последняя страница"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(val) = event_target_value(&ev).parse::<u32>() {
                        on_page_size_change.run(val);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts.into_iter().map(|size| {
                    view! {
                        <option value={size.to_string()} selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_past_end_is_clamped_for_display() {
        assert_eq!(display_page(99, 3), 3);
        assert_eq!(display_page(2, 3), 2);
        assert_eq!(display_page(5, 0), 1);
    }

    #[test]
    fn test_navigation_from_page_past_end() {
        assert_eq!(previous_page(99, 3), Some(3));
        assert_eq!(last_page(99, 3), Some(3));
        assert_eq!(previous_page(3, 3), Some(2));
        assert_eq!(last_page(3, 3), None);
        assert_eq!(previous_page(1, 3), None);
        assert_eq!(last_page(1, 0), None);
    }
}
