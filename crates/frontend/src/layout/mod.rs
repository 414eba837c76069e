pub mod navbar;
pub mod top_header;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use navbar::Navbar;
use top_header::TopHeader;

/// Frame of every signed-in page.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Navbar  |          Outlet               |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <aside class="app-sidebar">
                    <Navbar />
                </aside>
                <main class="app-main">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}
