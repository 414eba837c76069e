use crate::domain::a003_sales_target::api::SalesTargetApi;
use crate::domain::a003_sales_target::ui::details::SalesTargetDialog;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, BadgeVariant};
use crate::shared::crud::{deactivate_and_reload, Deactivation, EntityReader, LatestRequest, ListState, ListView};
use crate::shared::format::{format_date, format_money};
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use contracts::domain::a003_sales_target::{SalesTarget, SalesTargetFilter, TargetType};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Debug, PartialEq)]
pub struct SalesTargetRow {
    pub user: String,
    pub type_key: &'static str,
    pub amount: f64,
    pub period: String,
    pub is_active: bool,
    pub notes: String,
    pub target: SalesTarget,
}

impl From<SalesTarget> for SalesTargetRow {
    fn from(t: SalesTarget) -> Self {
        Self {
            user: t.user_name.clone().unwrap_or_else(|| t.user_id.to_string()),
            type_key: t.target_type.label_key(),
            amount: t.target_amount,
            period: format!(
                "{} - {}",
                format_date(t.target_period_start),
                format_date(t.target_period_end)
            ),
            is_active: t.is_active,
            notes: t.notes.clone().unwrap_or_default(),
            target: t,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum DialogState {
    Closed,
    Create,
    Edit(SalesTarget),
}

#[component]
#[allow(non_snake_case)]
pub fn SalesTargetsPage() -> impl IntoView {
    let i18n = use_i18n();
    let notifications = use_notifications();

    let state = RwSignal::new(ListState::<SalesTargetRow>::Loading);
    let filter = RwSignal::new(SalesTargetFilter::default());
    let dialog = RwSignal::new(DialogState::Closed);
    let latest = StoredValue::new(LatestRequest::default());

    let fetch = move || {
        let Some(current) = filter.try_get_untracked() else {
            return;
        };
        let Some(ticket) = latest.try_update_value(|l| l.begin()) else {
            return;
        };
        state.set(ListState::Loading);
        spawn_local(async move {
            let result = SalesTargetApi::new().list(&current).await;
            if !latest.try_with_value(|l| l.is_current(ticket)).unwrap_or(false) {
                return;
            }
            if let Err(e) = &result {
                log::error!("sales target list fetch failed: {}", e);
                notifications.error(i18n.t_untracked(e.message_key()));
            }
            state.try_set(ListState::from_result(
                result.map(|items| items.into_iter().map(Into::into).collect()),
            ));
        });
    };

    fetch();

    let deactivate = move |target: SalesTarget| {
        let confirmed = web_sys::window()
            .and_then(|win| {
                win.confirm_with_message(&i18n.t_untracked("sales_target.confirm_delete"))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let Some(current) = filter.try_get_untracked() else {
            return;
        };
        let Some(ticket) = latest.try_update_value(|l| l.begin()) else {
            return;
        };
        spawn_local(async move {
            let outcome = deactivate_and_reload(&SalesTargetApi::new(), &target.id, &current).await;
            match &outcome {
                Deactivation::Done(_) => {
                    notifications.success(i18n.t_untracked("sales_target.deleted"));
                }
                Deactivation::Rejected(e) => {
                    log::error!("sales target {} deactivation failed: {}", target.id, e);
                    notifications.error(i18n.t_untracked(e.message_key()));
                    fetch();
                    return;
                }
            }
            let is_current = latest.try_with_value(|l| l.is_current(ticket)).unwrap_or(false);
            if let Some(next) = outcome.into_list_state(is_current) {
                state.try_set(next.map_items(Into::into));
            }
        });
    };

    let close_dialog = Callback::new(move |_| dialog.set(DialogState::Closed));
    let after_save = Callback::new(move |_| {
        dialog.try_set(DialogState::Closed);
        fetch();
    });

    view! {
        <div class="page">
            <PageHeader title=Signal::derive(move || i18n.t("sales_target.list.title"))>
                <button class="button button--primary" on:click=move |_| dialog.set(DialogState::Create)>
                    {icon("plus")}
                    {move || i18n.t("sales_target.list.new")}
                </button>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    {move || i18n.t("common.refresh")}
                </button>
            </PageHeader>

            <div class="filter-panel">
                <label class="form__label" for="sales-target-filter-type">
                    {move || i18n.t("sales_target.field.target_type")}
                </label>
                <select
                    class="form__select"
                    id="sales-target-filter-type"
                    on:change=move |ev| {
                        let target_type = TargetType::from_code(&event_target_value(&ev));
                        filter.update(|f| f.target_type = target_type);
                        fetch();
                    }
                >
                    <option value="">{move || i18n.t("common.all")}</option>
                    {TargetType::all().into_iter().map(|t| view! {
                        <option value=t.code() selected=move || filter.with(|f| f.target_type == Some(t))>
                            {move || i18n.t(t.label_key())}
                        </option>
                    }).collect_view()}
                </select>

                <label class="form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || filter.with(|f| f.active_only)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            filter.update(|f| f.active_only = checked);
                            fetch();
                        }
                    />
                    {move || i18n.t("sales_target.list.active_only")}
                </label>
            </div>

            {move || match state.with(|s| s.view()) {
                ListView::Loading => view! {
                    <div class="list-state">{i18n.t("common.loading")}</div>
                }.into_any(),
                ListView::Error => view! {
                    <div class="warning-box text-error">{i18n.t("sales_target.list.load_failed")}</div>
                }.into_any(),
                ListView::Empty => view! {
                    <div class="list-state">{i18n.t("sales_target.list.empty")}</div>
                }.into_any(),
                ListView::Rows => view! {
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">{i18n.t("sales_target.field.user")}</th>
                                    <th class="table__header-cell">{i18n.t("sales_target.field.target_type")}</th>
                                    <th class="table__header-cell table__header-cell--right">{i18n.t("sales_target.field.amount")}</th>
                                    <th class="table__header-cell">{i18n.t("sales_target.list.period")}</th>
                                    <th class="table__header-cell">{i18n.t("sales_target.list.state")}</th>
                                    <th class="table__header-cell">{i18n.t("sales_target.field.notes")}</th>
                                    <th class="table__header-cell"></th>
                                </tr>
                            </thead>
                            <tbody>
                                {state.with(|s| s.items().to_vec()).into_iter().map(|row| {
                                    let edit_target = row.target.clone();
                                    let delete_target = row.target.clone();
                                    let (state_key, variant) = if row.is_active {
                                        ("sales_target.active", BadgeVariant::Success)
                                    } else {
                                        ("sales_target.inactive", BadgeVariant::Neutral)
                                    };
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{row.user}</td>
                                            <td class="table__cell">{i18n.t(row.type_key)}</td>
                                            <td class="table__cell table__cell--right">{format_money(row.amount, i18n.locale())}</td>
                                            <td class="table__cell">{row.period}</td>
                                            <td class="table__cell">
                                                <Badge variant=variant>{i18n.t(state_key)}</Badge>
                                            </td>
                                            <td class="table__cell">{row.notes}</td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--icon"
                                                    title=i18n.t("common.edit")
                                                    on:click=move |_| dialog.set(DialogState::Edit(edit_target.clone()))
                                                >
                                                    {icon("edit")}
                                                </button>
                                                {row.is_active.then(|| view! {
                                                    <button
                                                        class="button button--icon button--danger"
                                                        title=i18n.t("common.delete")
                                                        on:click=move |_| deactivate(delete_target.clone())
                                                    >
                                                        {icon("delete")}
                                                    </button>
                                                })}
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }.into_any(),
            }}

            {move || match dialog.get() {
                DialogState::Closed => ().into_any(),
                DialogState::Create => view! {
                    <SalesTargetDialog editing=None on_close=close_dialog on_saved=after_save />
                }.into_any(),
                DialogState::Edit(target) => view! {
                    <SalesTargetDialog editing=Some(target) on_close=close_dialog on_saved=after_save />
                }.into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a003_sales_target::SalesTargetId;
    use contracts::system::users::UserId;

    fn target() -> SalesTarget {
        SalesTarget {
            id: SalesTargetId::new_v4(),
            user_id: UserId::new_v4(),
            user_name: Some("Maija Meikäläinen".into()),
            target_type: TargetType::Quarterly,
            target_amount: 12500.0,
            target_period_start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            target_period_end: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            is_active: true,
            notes: None,
        }
    }

    #[test]
    fn test_row_keeps_amount_and_formats_period() {
        let row = SalesTargetRow::from(target());
        assert_eq!(row.user, "Maija Meikäläinen");
        assert_eq!(row.type_key, "sales_target.type.quarterly");
        assert_eq!(row.amount, 12500.0);
        assert_eq!(row.period, "01.01.2024 - 31.03.2024");
        assert_eq!(row.notes, "");
    }

    #[test]
    fn test_row_without_user_name_falls_back_to_id() {
        let mut t = target();
        t.user_name = None;
        let id = t.user_id.to_string();
        assert_eq!(SalesTargetRow::from(t).user, id);
    }
}
