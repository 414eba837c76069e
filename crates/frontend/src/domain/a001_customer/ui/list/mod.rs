use crate::domain::a001_customer::api::CustomerApi;
use crate::shared::components::page_header::PageHeader;
use crate::shared::config::routes;
use crate::shared::crud::{EntityReader, LatestRequest, ListState, ListView};
use crate::shared::format::format_date;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use contracts::domain::a001_customer::{Customer, CustomerFilter};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

#[derive(Clone, Debug)]
pub struct CustomerRow {
    pub id: String,
    pub name: String,
    pub type_key: &'static str,
    pub contact: String,
    pub city: String,
    pub created_at: String,
}

impl From<Customer> for CustomerRow {
    fn from(c: Customer) -> Self {
        let contact = [c.details.phone.as_deref(), c.details.email.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            id: c.id.to_string(),
            name: c.display_name().to_string(),
            type_key: c.customer_type.label_key(),
            contact: if contact.is_empty() { "-".to_string() } else { contact },
            city: c.details.city.clone().unwrap_or_else(|| "-".to_string()),
            created_at: c
                .created_at
                .map(|dt| format_date(dt.date_naive()))
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    let i18n = use_i18n();
    let notifications = use_notifications();
    let navigate = use_navigate();

    let state = RwSignal::new(ListState::<CustomerRow>::Loading);
    let search = RwSignal::new(String::new());
    let latest = StoredValue::new(LatestRequest::default());

    let fetch = move || {
        let filter = CustomerFilter::search(&search.get_untracked());
        let Some(ticket) = latest.try_update_value(|l| l.begin()) else {
            return;
        };
        state.set(ListState::Loading);
        spawn_local(async move {
            let result = CustomerApi::new().list(&filter).await;
            if !latest.try_with_value(|l| l.is_current(ticket)).unwrap_or(false) {
                return;
            }
            if let Err(e) = &result {
                log::error!("customer list fetch failed: {}", e);
                notifications.error(i18n.t_untracked(e.message_key()));
            }
            state.try_set(ListState::from_result(
                result.map(|items| items.into_iter().map(Into::into).collect()),
            ));
        });
    };

    fetch();

    let open_create = {
        let navigate = navigate.clone();
        move |_| navigate(routes::CUSTOMER_NEW, Default::default())
    };

    view! {
        <div class="page">
            <PageHeader title=Signal::derive(move || i18n.t("customer.list.title"))>
                <button class="button button--primary" on:click=open_create>
                    {icon("plus")}
                    {move || i18n.t("customer.list.new")}
                </button>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    {move || i18n.t("common.refresh")}
                </button>
            </PageHeader>

            <form class="filter-panel" on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                fetch();
            }>
                <input
                    class="form__input"
                    type="search"
                    placeholder=move || i18n.t("customer.list.search")
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </form>

            {move || match state.with(|s| s.view()) {
                ListView::Loading => view! {
                    <div class="list-state">{i18n.t("common.loading")}</div>
                }.into_any(),
                ListView::Error => view! {
                    <div class="warning-box text-error">{i18n.t("customer.list.load_failed")}</div>
                }.into_any(),
                ListView::Empty => view! {
                    <div class="list-state">{i18n.t("customer.list.empty")}</div>
                }.into_any(),
                ListView::Rows => view! {
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">{i18n.t("customer.field.name")}</th>
                                    <th class="table__header-cell">{i18n.t("customer.field.customer_type")}</th>
                                    <th class="table__header-cell">{i18n.t("customer.list.contact")}</th>
                                    <th class="table__header-cell">{i18n.t("customer.field.city")}</th>
                                    <th class="table__header-cell">{i18n.t("common.created_at")}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {state.with(|s| s.items().to_vec()).into_iter().map(|row| view! {
                                    <tr class="table__row" data-id=row.id>
                                        <td class="table__cell">{row.name}</td>
                                        <td class="table__cell">{i18n.t(row.type_key)}</td>
                                        <td class="table__cell">{row.contact}</td>
                                        <td class="table__cell">{row.city}</td>
                                        <td class="table__cell">{row.created_at}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
