use super::view_model::SalesTargetDialogViewModel;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::notifications::use_notifications;
use contracts::domain::a003_sales_target::{SalesTarget, SalesTargetField, TargetType};
use leptos::prelude::*;

#[component]
fn TargetInput(
    vm: SalesTargetDialogViewModel,
    field: SalesTargetField,
    label_key: &'static str,
    input_type: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let i18n = use_i18n();
    let id = label_key.replace('.', "-");

    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>
                {move || i18n.t(label_key)}
                {required.then_some(" *")}
            </label>
            <input
                class="form__input"
                type=input_type
                id=id
                required=required
                step=(input_type == "number").then_some("0.01")
                prop:value=move || vm.field(field)
                on:input=move |ev| vm.set_field(field, event_target_value(&ev))
                disabled=move || vm.is_submitting()
            />
        </div>
    }
}

/// Create dialog when `editing` is `None`, edit dialog otherwise
#[component]
pub fn SalesTargetDialog(
    editing: Option<SalesTarget>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    let vm = SalesTargetDialogViewModel::new(editing, use_notifications(), i18n);
    vm.load_users();

    let title_key = if vm.is_edit() {
        "sales_target.dialog.edit_title"
    } else {
        "sales_target.dialog.create_title"
    };

    // The dialog stays open until an in-flight save has settled
    let close = Callback::new(move |_| {
        if !vm.is_submitting() {
            on_close.run(());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(on_saved);
    };

    view! {
        <Modal title=Signal::derive(move || i18n.t(title_key)) on_close=close>
            <form class="detail-form" on:submit=on_submit>
                <div class="form__group">
                    <label class="form__label" for="sales-target-user">
                        {move || i18n.t("sales_target.field.user")}" *"
                    </label>
                    <select
                        class="form__select"
                        id="sales-target-user"
                        required=true
                        on:change=move |ev| vm.set_field(SalesTargetField::UserId, event_target_value(&ev))
                        disabled=move || vm.is_submitting()
                    >
                        <option value="">{move || i18n.t("sales_target.field.user_placeholder")}</option>
                        <For
                            each=move || vm.users.get()
                            key=|u| u.id
                            children=move |u| {
                                let value = u.id.to_string();
                                let selected_value = value.clone();
                                view! {
                                    <option
                                        value=value
                                        selected=move || vm.field(SalesTargetField::UserId) == selected_value
                                    >
                                        {u.display_name().to_string()}
                                    </option>
                                }
                            }
                        />
                    </select>
                </div>

                <div class="form__group">
                    <label class="form__label" for="sales-target-type">
                        {move || i18n.t("sales_target.field.target_type")}
                    </label>
                    <select
                        class="form__select"
                        id="sales-target-type"
                        on:change=move |ev| {
                            if let Some(t) = TargetType::from_code(&event_target_value(&ev)) {
                                vm.select_target_type(t);
                            }
                        }
                        disabled=move || vm.is_submitting()
                    >
                        {TargetType::all().into_iter().map(|t| view! {
                            <option value=t.code() selected=move || vm.target_type() == t>
                                {move || i18n.t(t.label_key())}
                            </option>
                        }).collect_view()}
                    </select>
                </div>

                <TargetInput vm=vm field=SalesTargetField::TargetAmount label_key="sales_target.field.amount" input_type="number" required=true />
                <TargetInput vm=vm field=SalesTargetField::PeriodStart label_key="sales_target.field.period_start" input_type="date" required=true />
                <TargetInput vm=vm field=SalesTargetField::PeriodEnd label_key="sales_target.field.period_end" input_type="date" required=true />

                <div class="form__group">
                    <label class="form__label" for="sales-target-notes">{move || i18n.t("sales_target.field.notes")}</label>
                    <textarea
                        class="form__input"
                        id="sales-target-notes"
                        rows="2"
                        prop:value=move || vm.field(SalesTargetField::Notes)
                        on:input=move |ev| vm.set_field(SalesTargetField::Notes, event_target_value(&ev))
                        disabled=move || vm.is_submitting()
                    />
                </div>

                <div class="details-actions">
                    <button type="submit" class="button button--primary" disabled=move || vm.is_submitting()>
                        {icon("save")}
                        {move || {
                            if vm.is_submitting() {
                                i18n.t("common.saving")
                            } else {
                                i18n.t("common.save")
                            }
                        }}
                    </button>
                    <button type="button" class="button button--secondary" on:click=move |_| close.run(())>
                        {icon("cancel")}
                        {move || i18n.t("common.cancel")}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
