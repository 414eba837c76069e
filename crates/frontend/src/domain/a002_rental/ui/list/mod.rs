use crate::domain::a002_rental::api::RentalApi;
use crate::domain::a002_rental::ui::status::{display_status, RentalStatusBadge};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::BadgeVariant;
use crate::shared::config::routes;
use crate::shared::crud::{EntityReader, LatestRequest, ListState, ListView};
use crate::shared::format::{format_date, format_optional_date};
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use chrono::NaiveDate;
use contracts::domain::a002_rental::{Rental, RentalFilter, RentalStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

#[derive(Clone, Debug, PartialEq)]
pub struct RentalRow {
    pub id: String,
    pub machine: String,
    pub customer: String,
    pub start_date: String,
    pub due_date: String,
    pub status_key: &'static str,
    pub status_variant: BadgeVariant,
    pub overdue: bool,
}

impl RentalRow {
    pub fn new(rental: &Rental, today: NaiveDate) -> Self {
        let (status_key, status_variant) = display_status(rental, today);
        let machine = match (&rental.machine_model, &rental.machine_serial) {
            (Some(model), Some(serial)) => format!("{} ({})", model, serial),
            (Some(model), None) => model.clone(),
            (None, Some(serial)) => serial.clone(),
            (None, None) => "-".to_string(),
        };

        Self {
            id: rental.id.to_string(),
            machine,
            customer: rental.customer_name.clone().unwrap_or_else(|| "-".to_string()),
            start_date: format_date(rental.rental_start_date),
            due_date: format_optional_date(rental.due_date()),
            status_key,
            status_variant,
            overdue: rental.is_overdue(today),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn RentalList() -> impl IntoView {
    let i18n = use_i18n();
    let notifications = use_notifications();
    let navigate = use_navigate();

    let state = RwSignal::new(ListState::<RentalRow>::Loading);
    let status = RwSignal::new(None::<RentalStatus>);
    let latest = StoredValue::new(LatestRequest::default());

    let fetch = move || {
        let filter = RentalFilter {
            status: status.get_untracked(),
        };
        let Some(ticket) = latest.try_update_value(|l| l.begin()) else {
            return;
        };
        state.set(ListState::Loading);
        spawn_local(async move {
            let result = RentalApi::new().list(&filter).await;
            if !latest.try_with_value(|l| l.is_current(ticket)).unwrap_or(false) {
                return;
            }
            if let Err(e) = &result {
                log::error!("rental list fetch failed: {}", e);
                notifications.error(i18n.t_untracked(e.message_key()));
            }
            let today = chrono::Local::now().date_naive();
            state.try_set(ListState::from_result(
                result.map(|items| items.iter().map(|r| RentalRow::new(r, today)).collect()),
            ));
        });
    };

    fetch();

    let open_details = move |id: String| navigate(&routes::rental_detail(&id), Default::default());

    view! {
        <div class="page">
            <PageHeader title=Signal::derive(move || i18n.t("rental.list.title"))>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    {move || i18n.t("common.refresh")}
                </button>
            </PageHeader>

            <div class="filter-panel">
                <label class="form__label">{move || i18n.t("rental.field.status")}</label>
                <select
                    class="form__select"
                    on:change=move |ev| {
                        status.set(RentalStatus::from_code(&event_target_value(&ev)));
                        fetch();
                    }
                >
                    <option value="" selected=move || status.get().is_none()>
                        {move || i18n.t("common.all")}
                    </option>
                    {RentalStatus::all().into_iter().map(|s| view! {
                        <option value=s.code() selected=move || status.get() == Some(s)>
                            {move || i18n.t(s.label_key())}
                        </option>
                    }).collect_view()}
                </select>
            </div>

            {move || match state.with(|s| s.view()) {
                ListView::Loading => view! {
                    <div class="list-state">{i18n.t("common.loading")}</div>
                }.into_any(),
                ListView::Error => view! {
                    <div class="warning-box text-error">{i18n.t("rental.list.load_failed")}</div>
                }.into_any(),
                ListView::Empty => view! {
                    <div class="list-state">{i18n.t("rental.list.empty")}</div>
                }.into_any(),
                ListView::Rows => {
                    let open_details = open_details.clone();
                    view! {
                        <div class="table">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">{i18n.t("rental.field.machine_model")}</th>
                                        <th class="table__header-cell">{i18n.t("rental.field.customer_name")}</th>
                                        <th class="table__header-cell">{i18n.t("rental.field.start_date")}</th>
                                        <th class="table__header-cell">{i18n.t("rental.field.due_date")}</th>
                                        <th class="table__header-cell">{i18n.t("rental.field.status")}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {state.with(|s| s.items().to_vec()).into_iter().map(|row| {
                                        let open_details = open_details.clone();
                                        let id = row.id.clone();
                                        view! {
                                            <tr
                                                class=if row.overdue {
                                                    "table__row table__row--clickable table__row--overdue"
                                                } else {
                                                    "table__row table__row--clickable"
                                                }
                                                on:click=move |_| open_details(id.clone())
                                            >
                                                <td class="table__cell">{row.machine}</td>
                                                <td class="table__cell">{row.customer}</td>
                                                <td class="table__cell">{row.start_date}</td>
                                                <td class="table__cell">{row.due_date}</td>
                                                <td class="table__cell">
                                                    <RentalStatusBadge label_key=row.status_key variant=row.status_variant />
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_customer::CustomerId;
    use contracts::domain::a002_rental::{RentalId, RentalMachineId};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rental() -> Rental {
        Rental {
            id: RentalId::new_v4(),
            rental_machine_id: RentalMachineId::new_v4(),
            customer_id: CustomerId::new_v4(),
            rental_start_date: date(2024, 3, 1),
            planned_end_date: Some(date(2024, 3, 10)),
            rental_end_date: None,
            rental_status: RentalStatus::Active,
            daily_rate: Some(45.0),
            notes: None,
            customer_name: Some("Acme Oy".into()),
            customer_address: None,
            machine_model: Some("Husqvarna 550".into()),
            machine_serial: Some("SN-42".into()),
        }
    }

    #[test]
    fn test_row_of_late_active_rental_is_flagged_overdue() {
        let row = RentalRow::new(&rental(), date(2024, 3, 15));
        assert!(row.overdue);
        assert_eq!(row.status_key, "rental.status.overdue");
        assert_eq!(row.status_variant, BadgeVariant::Error);
        assert_eq!(row.machine, "Husqvarna 550 (SN-42)");
        assert_eq!(row.due_date, "10.03.2024");
    }

    #[test]
    fn test_row_without_machine_or_customer_shows_dashes() {
        let mut r = rental();
        r.machine_model = None;
        r.machine_serial = None;
        r.customer_name = None;
        let row = RentalRow::new(&r, date(2024, 3, 5));
        assert!(!row.overdue);
        assert_eq!(row.status_key, "rental.status.active");
        assert_eq!(row.machine, "-");
        assert_eq!(row.customer, "-");
    }
}
