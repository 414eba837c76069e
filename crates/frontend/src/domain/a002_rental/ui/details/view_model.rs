use contracts::domain::a002_rental::{Rental, RentalId};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_rental::api::RentalApi;
use crate::shared::api_utils::ApiError;
use crate::shared::crud::EntityReader;
use crate::shared::i18n::I18n;
use crate::shared::notifications::NotificationService;

/// A missing rental and a failed request end in the same `Failed` state;
/// only the log tells them apart.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Failed,
    Loaded(Rental),
}

#[derive(Clone, Copy)]
pub struct RentalDetailsViewModel {
    pub state: RwSignal<DetailState>,
    notifications: NotificationService,
    i18n: I18n,
}

impl RentalDetailsViewModel {
    pub fn new(notifications: NotificationService, i18n: I18n) -> Self {
        Self {
            state: RwSignal::new(DetailState::Loading),
            notifications,
            i18n,
        }
    }

    /// Fetch the rental named by the route segment
    pub fn load(&self, raw_id: Option<String>) {
        let id = match raw_id.as_deref().map(RentalId::from_string) {
            Some(Ok(id)) => id,
            Some(Err(e)) => {
                log::error!("invalid rental id in route: {}", e);
                self.fail();
                return;
            }
            None => {
                log::error!("rental route without id");
                self.fail();
                return;
            }
        };

        self.state.set(DetailState::Loading);
        let vm = *self;
        spawn_local(async move {
            match RentalApi::new().get(&id).await {
                Ok(rental) => {
                    vm.state.try_set(DetailState::Loaded(rental));
                }
                Err(ApiError::NotFound) => {
                    log::error!("rental {} not found", id);
                    vm.fail();
                }
                Err(e) => {
                    log::error!("rental {} fetch failed: {}", id, e);
                    vm.fail();
                }
            }
        });
    }

    /// Skipped silently when the page is already gone
    fn fail(&self) {
        if self.state.try_set(DetailState::Failed).is_none() {
            self.notifications
                .error(self.i18n.t_untracked("rental.details.load_failed"));
        }
    }
}
