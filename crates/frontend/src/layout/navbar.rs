use crate::shared::config::routes;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

const ITEMS: [(&str, &str, &str); 4] = [
    (routes::DASHBOARD, "dashboard", "nav.dashboard"),
    (routes::CUSTOMERS, "customers", "nav.customers"),
    (routes::RENTALS, "rentals", "nav.rentals"),
    (routes::SALES_TARGETS, "targets", "nav.sales_targets"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <nav class="main-nav-bar">
            <ul>
                {ITEMS.into_iter().map(|(href, icon_name, label_key)| {
                    view! {
                        <li>
                            <A href=href>
                                {icon(icon_name)}
                                <span>{move || i18n.t(label_key)}</span>
                            </A>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
