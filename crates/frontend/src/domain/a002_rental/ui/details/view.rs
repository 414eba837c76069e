use super::view_model::{DetailState, RentalDetailsViewModel};
use crate::domain::a002_rental::ui::status::{display_status, RentalStatusBadge};
use crate::shared::components::page_header::PageHeader;
use crate::shared::config::routes;
use crate::shared::format::{format_date, format_money, format_optional_date};
use crate::shared::i18n::use_i18n;
use crate::shared::notifications::use_notifications;
use contracts::domain::a002_rental::Rental;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

fn text_or_dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

#[component]
fn DetailRow(label_key: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="detail-row">
            <span class="detail-row__label">{move || i18n.t(label_key)}</span>
            <span class="detail-row__value">{move || value.get()}</span>
        </div>
    }
}

#[component]
fn RentalCard(rental: Rental) -> impl IntoView {
    let i18n = use_i18n();
    let today = chrono::Local::now().date_naive();
    let (label_key, variant) = display_status(&rental, today);
    let is_overdue = rental.is_overdue(today);
    let duration = rental.duration_days(today);
    let daily_rate = rental.daily_rate;

    view! {
        <div class="details-container rental-details">
            {is_overdue.then(|| view! {
                <div class="warning-box text-error">{move || i18n.t("rental.details.overdue_warning")}</div>
            })}

            <section class="details-section">
                <h3>{move || i18n.t("rental.details.machine")}</h3>
                <DetailRow label_key="rental.field.machine_model" value=text_or_dash(&rental.machine_model) />
                <DetailRow label_key="rental.field.machine_serial" value=text_or_dash(&rental.machine_serial) />
            </section>

            <section class="details-section">
                <h3>{move || i18n.t("rental.details.customer")}</h3>
                <DetailRow label_key="rental.field.customer_name" value=text_or_dash(&rental.customer_name) />
                <DetailRow label_key="rental.field.customer_address" value=text_or_dash(&rental.customer_address) />
            </section>

            <section class="details-section">
                <h3>{move || i18n.t("rental.details.period")}</h3>
                <div class="detail-row">
                    <span class="detail-row__label">{move || i18n.t("rental.field.status")}</span>
                    <span class="detail-row__value">
                        <RentalStatusBadge label_key=label_key variant=variant />
                    </span>
                </div>
                <DetailRow label_key="rental.field.start_date" value=format_date(rental.rental_start_date) />
                <DetailRow label_key="rental.field.due_date" value=format_optional_date(rental.due_date()) />
                <DetailRow label_key="rental.field.end_date" value=format_optional_date(rental.rental_end_date) />
                <DetailRow label_key="rental.field.duration_days" value=duration.to_string() />
                <DetailRow
                    label_key="rental.field.daily_rate"
                    value=Signal::derive(move || {
                        daily_rate
                            .map(|rate| format_money(rate, i18n.locale()))
                            .unwrap_or_else(|| "-".to_string())
                    })
                />
            </section>

            {rental.notes.clone().map(|notes| view! {
                <section class="details-section">
                    <h3>{move || i18n.t("rental.field.notes")}</h3>
                    <p class="details-notes">{notes}</p>
                </section>
            })}
        </div>
    }
}

#[component]
pub fn RentalDetails() -> impl IntoView {
    let i18n = use_i18n();
    let vm = RentalDetailsViewModel::new(use_notifications(), i18n);
    let params = use_params_map();
    let navigate = use_navigate();
    let back = move || navigate(routes::RENTALS, Default::default());

    Effect::new(move |_| {
        let raw_id = params.with(|p| p.get("id"));
        vm.load(raw_id);
    });

    view! {
        <div class="page">
            <PageHeader title=Signal::derive(move || i18n.t("rental.details.title"))>
                <button class="button button--secondary" on:click=move |_| back()>
                    {move || i18n.t("common.back")}
                </button>
            </PageHeader>

            {move || match vm.state.get() {
                DetailState::Loading => view! {
                    <div class="list-state">{i18n.t("common.loading")}</div>
                }.into_any(),
                DetailState::Failed => view! {
                    <div class="warning-box text-error">{i18n.t("rental.details.load_failed")}</div>
                }.into_any(),
                DetailState::Loaded(rental) => view! { <RentalCard rental=rental /> }.into_any(),
            }}
        </div>
    }
}
