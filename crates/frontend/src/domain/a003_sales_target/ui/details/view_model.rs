use contracts::domain::a003_sales_target::{
    SalesTarget, SalesTargetDraft, SalesTargetField, SalesTargetId, TargetType,
};
use contracts::system::users::UserSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_sales_target::api::SalesTargetApi;
use crate::shared::crud::{submit, FormMode, SubmitGuard};
use crate::shared::i18n::I18n;
use crate::shared::notifications::NotificationService;
use crate::system::users::api::fetch_users;

/// ViewModel of the create/edit dialog
#[derive(Clone, Copy)]
pub struct SalesTargetDialogViewModel {
    pub form: RwSignal<SalesTargetDraft>,
    pub mode: StoredValue<FormMode<SalesTargetId>>,
    pub guard: RwSignal<SubmitGuard>,
    pub users: RwSignal<Vec<UserSummary>>,
    notifications: NotificationService,
    i18n: I18n,
}

impl SalesTargetDialogViewModel {
    /// Create mode when `editing` is `None`, otherwise edit mode pre-filled
    /// from the target
    pub fn new(editing: Option<SalesTarget>, notifications: NotificationService, i18n: I18n) -> Self {
        let today = chrono::Local::now().date_naive();
        let form = match &editing {
            Some(target) => SalesTargetDraft::from_target(target),
            None => SalesTargetDraft::new(today),
        };

        Self {
            form: RwSignal::new(form),
            mode: StoredValue::new(FormMode::from_editing(editing.map(|t| t.id))),
            guard: RwSignal::new(SubmitGuard::default()),
            users: RwSignal::new(Vec::new()),
            notifications,
            i18n,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.mode.with_value(|m| m.is_edit())
    }

    pub fn load_users(&self) {
        let users = self.users;
        let notifications = self.notifications;
        let i18n = self.i18n;
        spawn_local(async move {
            match fetch_users().await {
                Ok(list) => {
                    users.try_set(list);
                }
                Err(e) => {
                    log::error!("user list fetch failed: {}", e);
                    notifications.error(i18n.t_untracked("sales_target.users_failed"));
                }
            }
        });
    }

    pub fn field(&self, field: SalesTargetField) -> String {
        self.form.with(|f| f.field(field).to_string())
    }

    pub fn set_field(&self, field: SalesTargetField, value: String) {
        self.form.update(|f| f.set_field(field, value));
    }

    pub fn target_type(&self) -> TargetType {
        self.form.with(|f| f.target_type)
    }

    /// Changing the type resets the period to the one containing today
    pub fn select_target_type(&self, target_type: TargetType) {
        let today = chrono::Local::now().date_naive();
        self.form.update(|f| f.select_target_type(target_type, today));
    }

    pub fn is_submitting(&self) -> bool {
        self.guard.with(|g| g.is_submitting())
    }

    /// Create or update depending on the mode; `on_saved` runs after a
    /// successful save so the owner can close the dialog and refetch.
    pub fn save_command(&self, on_saved: Callback<()>) {
        if !self.guard.try_update(|g| g.try_begin()).unwrap_or(false) {
            return;
        }

        let payload = self.form.with_untracked(SalesTargetDraft::to_payload);
        let mode = self.mode.get_value();
        let guard = self.guard;
        let notifications = self.notifications;
        let i18n = self.i18n;
        spawn_local(async move {
            let result = submit(&SalesTargetApi::new(), &mode, payload).await;
            if guard.try_update(|g| g.finish()).is_none() {
                return;
            }
            match result {
                Ok(target) => {
                    log::info!("sales target {} saved", target.id);
                    let key = if mode.is_edit() {
                        "sales_target.updated"
                    } else {
                        "sales_target.created"
                    };
                    notifications.success(i18n.t_untracked(key));
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("sales target save failed: {}", e);
                    notifications.error(i18n.t_untracked(e.message_key()));
                }
            }
        });
    }
}
