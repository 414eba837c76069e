use contracts::domain::a001_customer::{Customer, CustomerDraft, CustomerField, CustomerType};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

use crate::domain::a001_customer::api::CustomerApi;
use crate::shared::crud::{submit, FormMode, SubmitGuard};
use crate::shared::i18n::I18n;
use crate::shared::notifications::NotificationService;

/// ViewModel for the customer creation form
#[derive(Clone, Copy)]
pub struct CustomerCreateViewModel {
    pub form: RwSignal<CustomerDraft>,
    pub guard: RwSignal<SubmitGuard>,
    notifications: NotificationService,
    i18n: I18n,
}

impl CustomerCreateViewModel {
    pub fn new(notifications: NotificationService, i18n: I18n) -> Self {
        Self {
            form: RwSignal::new(CustomerDraft::default()),
            guard: RwSignal::new(SubmitGuard::default()),
            notifications,
            i18n,
        }
    }

    pub fn field(&self, field: CustomerField) -> String {
        self.form.with(|f| f.field(field).to_string())
    }

    pub fn set_field(&self, field: CustomerField, value: String) {
        self.form.update(|f| f.set_field(field, value));
    }

    pub fn customer_type(&self) -> CustomerType {
        self.form.with(|f| f.customer_type)
    }

    pub fn set_customer_type(&self, customer_type: CustomerType) {
        self.form.update(|f| f.customer_type = customer_type);
    }

    pub fn is_submitting(&self) -> bool {
        self.guard.with(|g| g.is_submitting())
    }

    /// Build the payload and create the customer. On success `on_saved`
    /// receives the stored customer; on failure the form keeps its values.
    pub fn save_command(&self, on_saved: Rc<dyn Fn(Customer)>) {
        if !self.guard.try_update(|g| g.try_begin()).unwrap_or(false) {
            return;
        }

        let payload = self.form.with_untracked(CustomerDraft::to_payload);
        let guard = self.guard;
        let notifications = self.notifications;
        let i18n = self.i18n;
        spawn_local(async move {
            let result = submit(&CustomerApi::new(), &FormMode::Create, payload).await;
            guard.try_update(|g| g.finish());
            match result {
                Ok(customer) => {
                    notifications.success(i18n.t_untracked("customer.created"));
                    on_saved(customer);
                }
                Err(e) => {
                    log::error!("customer creation failed: {}", e);
                    notifications.error(i18n.t_untracked(e.message_key()));
                }
            }
        });
    }
}
