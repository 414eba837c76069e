use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::{use_session, SessionState};
use crate::shared::config::routes;
use crate::shared::i18n::use_i18n;

/// Renders children only for a signed-in user; anonymous visitors are sent
/// to the login page. Nothing is decided while the session is still loading.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let i18n = use_i18n();

    move || match session.state.get() {
        SessionState::Loading => {
            view! { <div class="page page--centered">{i18n.t("common.loading")}</div> }.into_any()
        }
        SessionState::Anonymous => view! { <Redirect path=routes::LOGIN /> }.into_any(),
        SessionState::Authenticated(_) => children().into_any(),
    }
}
