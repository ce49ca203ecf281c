use contracts::domain::a001_sales_order::dto::{
    listing_config, SalesOrderDto, SalesOrderStatus, REGIONS,
};
use contracts::shared::listing::QueryUpdate;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_sales_order::api::fetch_sales_orders;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::paginated_table::{PaginatedTable, TableColumn};
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::list_utils::format_amount;
use crate::shared::listing_query::use_listing_query_state;

fn status_variant(status: SalesOrderStatus) -> &'static str {
    match status {
        SalesOrderStatus::Draft => "neutral",
        SalesOrderStatus::Confirmed => "primary",
        SalesOrderStatus::Shipped => "warning",
        SalesOrderStatus::Invoiced => "success",
        SalesOrderStatus::Cancelled => "error",
    }
}

fn columns() -> Vec<TableColumn<SalesOrderDto>> {
    vec![
        TableColumn::new("Номер", |o: &SalesOrderDto| o.order_no.clone().into_any())
            .sortable("order_no")
            .min_width(110.0),
        TableColumn::new("Дата", |o: &SalesOrderDto| {
            o.order_date.format("%d.%m.%Y").to_string().into_any()
        })
        .sortable("order_date")
        .min_width(100.0),
        TableColumn::new("Покупатель", |o: &SalesOrderDto| o.customer.clone().into_any())
            .sortable("customer")
            .min_width(200.0),
        TableColumn::new("Регион", |o: &SalesOrderDto| o.region.clone().into_any()),
        TableColumn::new("Статус", |o: &SalesOrderDto| {
            let variant = status_variant(o.status);
            let label = o.status.label();
            view! { <Badge variant=variant>{label}</Badge> }.into_any()
        })
        .min_width(130.0),
        TableColumn::new("Мощность, кВт", |o: &SalesOrderDto| {
            format!("{:.1}", o.capacity_kw).into_any()
        })
        .sortable("capacity_kw")
        .align_right(),
        TableColumn::new("Сумма", |o: &SalesOrderDto| format_amount(o.amount).into_any())
            .sortable("amount")
            .min_width(130.0)
            .align_right(),
    ]
}

/// Список заказов: поиск, фильтры, сортировка и страница живут в URL
#[component]
pub fn SalesOrderList() -> impl IntoView {
    let listing = use_listing_query_state(listing_config());

    let active_filters = Memo::new(move |_| listing.filters().active_count());

    let on_status_change = move |ev| {
        let value = event_target_value(&ev);
        listing.set_filter("status", Some(&value));
    };
    let on_region_change = move |ev| {
        let value = event_target_value(&ev);
        listing.set_filter("region", Some(&value));
    };

    // Поиск и фильтры сбрасываются одной заменой URL
    let reset_all = move |_| {
        listing.batch(&[QueryUpdate::Query(None), QueryUpdate::ClearFilters]);
    };

    view! {
        <div class="page">
            <PageHeader title="Заказы покупателей">
                {icon("orders")}
            </PageHeader>

            <div class="filter-panel">
                <SearchInput
                    value=Signal::derive(move || listing.q())
                    on_change=Callback::new(move |value: String| listing.set_q(Some(&value)))
                    placeholder="Номер, покупатель или регион"
                />

                <label class="filter-panel__field">
                    <span>"Статус"</span>
                    <select
                        prop:value=move || listing.filter("status")
                        on:change=on_status_change
                    >
                        <option value="">"Все"</option>
                        {SalesOrderStatus::ALL
                            .into_iter()
                            .map(|status| view! {
                                <option value=status.as_str()>{status.label()}</option>
                            })
                            .collect_view()}
                    </select>
                </label>

                <label class="filter-panel__field">
                    <span>"Регион"</span>
                    <select
                        prop:value=move || listing.filter("region")
                        on:change=on_region_change
                    >
                        <option value="">"Все"</option>
                        {REGIONS
                            .into_iter()
                            .map(|region| view! { <option value=region>{region}</option> })
                            .collect_view()}
                    </select>
                </label>

                <SearchInput
                    value=Signal::derive(move || listing.filter("customer"))
                    on_change=Callback::new(move |value: String| {
                        listing.set_filter("customer", Some(&value))
                    })
                    placeholder="Покупатель"
                />

                <Show when=move || { active_filters.get() > 0 }>
                    <Badge variant="primary">
                        {icon("filter")}
                        {move || format!(" {}", active_filters.get())}
                    </Badge>
                    <Button size=ButtonSize::Small on_click=move |_| listing.clear_filters()>
                        "Сбросить фильтры"
                    </Button>
                </Show>

                <Button appearance=ButtonAppearance::Subtle size=ButtonSize::Small on_click=reset_all>
                    "Сбросить всё"
                </Button>
            </div>

            <PaginatedTable
                listing=listing
                columns=columns()
                fetch=fetch_sales_orders
            />
        </div>
    }
}
