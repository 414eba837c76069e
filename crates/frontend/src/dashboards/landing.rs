use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::components::page_header::PageHeader;
use crate::shared::config::routes;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::system::auth::use_session;

/// Link tile on a landing page
#[component]
fn Tile(href: &'static str, icon_name: &'static str, label_key: &'static str) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <A href=href>
            <div class="dashboard-tile">
                {icon(icon_name)}
                <span class="dashboard-tile__label">{move || i18n.t(label_key)}</span>
            </div>
        </A>
    }
}

#[component]
fn Landing(title_key: &'static str, children: Children) -> impl IntoView {
    let i18n = use_i18n();
    let session = use_session();
    let greeting = Signal::derive(move || {
        session
            .state
            .with(|s| s.user().map(|u| u.display_name().to_string()))
            .map(|name| format!("{}, {}", i18n.t("dashboard.welcome"), name))
    });

    view! {
        <div class="page">
            <PageHeader title=Signal::derive(move || i18n.t(title_key)) subtitle=greeting />
            <div class="dashboard-tiles">{children()}</div>
        </div>
    }
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    view! {
        <Landing title_key="dashboard.admin.title">
            <Tile href=routes::CUSTOMERS icon_name="customers" label_key="nav.customers" />
            <Tile href=routes::RENTALS icon_name="rentals" label_key="nav.rentals" />
            <Tile href=routes::SALES_TARGETS icon_name="targets" label_key="nav.sales_targets" />
        </Landing>
    }
}

#[component]
pub fn ManagerDashboard() -> impl IntoView {
    view! {
        <Landing title_key="dashboard.manager.title">
            <Tile href=routes::RENTALS icon_name="rentals" label_key="nav.rentals" />
            <Tile href=routes::SALES_TARGETS icon_name="targets" label_key="nav.sales_targets" />
            <Tile href=routes::CUSTOMERS icon_name="customers" label_key="nav.customers" />
        </Landing>
    }
}

/// Default view for technicians and any role without its own dashboard
#[component]
pub fn WorkView() -> impl IntoView {
    view! {
        <Landing title_key="dashboard.work.title">
            <Tile href=routes::RENTALS icon_name="rentals" label_key="nav.rentals" />
            <Tile href=routes::CUSTOMER_NEW icon_name="plus" label_key="customer.list.new" />
        </Landing>
    }
}
