use crate::domain::a001_sales_order::ui::list::SalesOrderList;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <main class="app-main">
                <SalesOrderList />
            </main>
        </ConfigProvider>
    }
}
