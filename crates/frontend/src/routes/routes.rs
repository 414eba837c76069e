use crate::dashboards::{AdminDashboard, ManagerDashboard, RoleRedirector, WorkView};
use crate::domain::a001_customer::ui::create::CustomerCreate;
use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a002_rental::ui::details::RentalDetails;
use crate::domain::a002_rental::ui::list::RentalList;
use crate::domain::a003_sales_target::ui::list::SalesTargetsPage;
use crate::layout::Shell;
use crate::shared::config::routes;
use crate::shared::i18n::use_i18n;
use crate::system::auth::RequireAuth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes, A};
use leptos_router::path;

#[component]
fn Protected() -> impl IntoView {
    view! {
        <RequireAuth>
            <Shell />
        </RequireAuth>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="page page--centered">
            <h1>{move || i18n.t("common.not_found")}</h1>
            <A href=routes::DASHBOARD>{move || i18n.t("nav.dashboard")}</A>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("") view=Protected>
                    <Route path=path!("") view=|| view! { <Redirect path=routes::DASHBOARD /> } />
                    <Route path=path!("/dashboard") view=RoleRedirector />
                    <Route path=path!("/admin/dashboard") view=AdminDashboard />
                    <Route path=path!("/manager/dashboard") view=ManagerDashboard />
                    <Route path=path!("/work") view=WorkView />
                    <Route path=path!("/customers") view=CustomerList />
                    <Route path=path!("/customers/new") view=CustomerCreate />
                    <Route path=path!("/rentals") view=RentalList />
                    <Route path=path!("/rentals/:id") view=RentalDetails />
                    <Route path=path!("/sales-targets") view=SalesTargetsPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
