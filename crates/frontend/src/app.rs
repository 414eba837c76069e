use crate::routes::routes::AppRoutes;
use crate::shared::i18n::I18n;
use crate::shared::notifications::{NotificationHost, NotificationService};
use crate::system::auth::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(I18n::new());
    provide_context(NotificationService::new());

    view! {
        <SessionProvider>
            <AppRoutes />
        </SessionProvider>
        <NotificationHost />
    }
}
