use super::view_model::CustomerCreateViewModel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::config::routes;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use contracts::domain::a001_customer::{Customer, CustomerField, CustomerType};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use std::rc::Rc;

#[component]
fn CustomerInput(
    vm: CustomerCreateViewModel,
    field: CustomerField,
    label_key: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
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
                type=input_type.unwrap_or("text")
                id=id
                required=required
                prop:value=move || vm.field(field)
                on:input=move |ev| vm.set_field(field, event_target_value(&ev))
                disabled=move || vm.is_submitting()
            />
        </div>
    }
}

#[component]
pub fn CustomerCreate() -> impl IntoView {
    let i18n = use_i18n();
    let vm = CustomerCreateViewModel::new(use_notifications(), i18n);
    let navigate = use_navigate();

    // Only switches of the discriminant rebuild the name-bearing inputs
    let customer_type = Memo::new(move |_| vm.customer_type());

    let on_saved: Rc<dyn Fn(Customer)> = {
        let navigate = navigate.clone();
        Rc::new(move |_| navigate(routes::CUSTOMERS, Default::default()))
    };
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(on_saved.clone());
    };
    let on_cancel = move |_| navigate(routes::CUSTOMERS, Default::default());

    view! {
        <div class="page">
            <PageHeader title=Signal::derive(move || i18n.t("customer.create.title")) />

            <form class="detail-form" on:submit=on_submit>
                <fieldset class="form__group form__group--inline">
                    <legend class="form__label">{move || i18n.t("customer.field.customer_type")}</legend>
                    {CustomerType::all()
                        .into_iter()
                        .map(|t| {
                            view! {
                                <label class="form__radio">
                                    <input
                                        type="radio"
                                        name="customer_type"
                                        value=t.code()
                                        prop:checked=move || customer_type.get() == t
                                        on:change=move |_| vm.set_customer_type(t)
                                    />
                                    {move || i18n.t(t.label_key())}
                                </label>
                            }
                        })
                        .collect_view()}
                </fieldset>

                {move || match customer_type.get() {
                    CustomerType::Private => view! {
                        <CustomerInput vm=vm field=CustomerField::Name label_key="customer.field.name" required=true />
                        <CustomerInput vm=vm field=CustomerField::CompanyName label_key="customer.field.company_name" />
                    }
                    .into_any(),
                    CustomerType::Company => view! {
                        <CustomerInput vm=vm field=CustomerField::CompanyName label_key="customer.field.company_name" required=true />
                        <CustomerInput vm=vm field=CustomerField::ContactPerson label_key="customer.field.contact_person" required=true />
                        <CustomerInput vm=vm field=CustomerField::BusinessId label_key="customer.field.business_id" />
                    }
                    .into_any(),
                }}

                <CustomerInput vm=vm field=CustomerField::Email label_key="customer.field.email" input_type="email" />
                <CustomerInput vm=vm field=CustomerField::Phone label_key="customer.field.phone" input_type="tel" />
                <CustomerInput vm=vm field=CustomerField::StreetAddress label_key="customer.field.street_address" />
                <CustomerInput vm=vm field=CustomerField::PostalCode label_key="customer.field.postal_code" />
                <CustomerInput vm=vm field=CustomerField::City label_key="customer.field.city" />
                <CustomerInput vm=vm field=CustomerField::OwnerName label_key="customer.field.owner_name" />

                <div class="form__group">
                    <label class="form__label" for="customer-notes">{move || i18n.t("customer.field.notes")}</label>
                    <textarea
                        class="form__input"
                        id="customer-notes"
                        rows="3"
                        prop:value=move || vm.field(CustomerField::Notes)
                        on:input=move |ev| vm.set_field(CustomerField::Notes, event_target_value(&ev))
                        disabled=move || vm.is_submitting()
                    />
                </div>

                <div class="details-actions">
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || vm.is_submitting()
                    >
                        {icon("save")}
                        {move || {
                            if vm.is_submitting() {
                                i18n.t("common.saving")
                            } else {
                                i18n.t("common.save")
                            }
                        }}
                    </button>
                    <button type="button" class="button button--secondary" on:click=on_cancel>
                        {icon("cancel")}
                        {move || i18n.t("common.cancel")}
                    </button>
                </div>
            </form>
        </div>
    }
}
