//! Application top bar: title, language picker, current user and logout.

use crate::shared::i18n::{use_i18n, Locale};
use crate::shared::icons::icon;
use crate::system::auth::use_session;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let i18n = use_i18n();
    let session = use_session();

    let user_name = move || {
        session
            .state
            .with(|s| s.user().map(|u| u.display_name().to_string()))
            .unwrap_or_default()
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">{move || i18n.t("app.title")}</span>
            </div>

            <div class="top-header__actions">
                <select
                    class="top-header__locale"
                    on:change=move |ev| {
                        if let Some(locale) = Locale::from_code(&event_target_value(&ev)) {
                            i18n.set_locale(locale);
                        }
                    }
                >
                    {Locale::all().into_iter().map(|l| view! {
                        <option value=l.code() selected=move || i18n.locale() == l>
                            {l.native_name()}
                        </option>
                    }).collect_view()}
                </select>

                <div class="top-header__user">
                    <span>{user_name}</span>
                </div>

                <button
                    class="top-header__icon-btn"
                    on:click=move |_| session.logout()
                    title=move || i18n.t("nav.logout")
                >
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
