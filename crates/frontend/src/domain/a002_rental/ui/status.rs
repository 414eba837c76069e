use contracts::domain::a002_rental::{Rental, RentalStatus};
use chrono::NaiveDate;
use leptos::prelude::*;

use crate::shared::components::ui::{Badge, BadgeVariant};
use crate::shared::i18n::use_i18n;

/// Badge variant of each persisted status
pub fn status_variant(status: RentalStatus) -> BadgeVariant {
    match status {
        RentalStatus::Active => BadgeVariant::Primary,
        RentalStatus::Reserved => BadgeVariant::Neutral,
        RentalStatus::Returned => BadgeVariant::Success,
        RentalStatus::Overdue => BadgeVariant::Error,
        RentalStatus::Cancelled => BadgeVariant::Warning,
    }
}

/// Label key and variant to show for a rental on `today`.
///
/// An open rental past its due date is shown as overdue whatever status the
/// backend stored.
pub fn display_status(rental: &Rental, today: NaiveDate) -> (&'static str, BadgeVariant) {
    if rental.is_overdue(today) {
        let overdue = RentalStatus::Overdue;
        (overdue.label_key(), status_variant(overdue))
    } else {
        let status = rental.rental_status;
        (status.label_key(), status_variant(status))
    }
}

#[component]
pub fn RentalStatusBadge(label_key: &'static str, variant: BadgeVariant) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <Badge variant=variant>{move || i18n.t(label_key)}</Badge>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_customer::CustomerId;
    use contracts::domain::a002_rental::{RentalId, RentalMachineId};

    fn rental(status: RentalStatus, due: Option<NaiveDate>) -> Rental {
        Rental {
            id: RentalId::new_v4(),
            rental_machine_id: RentalMachineId::new_v4(),
            customer_id: CustomerId::new_v4(),
            rental_start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            planned_end_date: due,
            rental_end_date: None,
            rental_status: status,
            daily_rate: None,
            notes: None,
            customer_name: None,
            customer_address: None,
            machine_model: None,
            machine_serial: None,
        }
    }

    #[test]
    fn test_every_status_has_distinct_label() {
        let labels: std::collections::HashSet<_> =
            RentalStatus::all().iter().map(|s| s.label_key()).collect();
        assert_eq!(labels.len(), RentalStatus::all().len());
    }

    #[test]
    fn test_past_due_active_rental_shows_overdue() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let due = NaiveDate::from_ymd_opt(2024, 3, 10);
        assert_eq!(
            display_status(&rental(RentalStatus::Active, due), today),
            ("rental.status.overdue", BadgeVariant::Error)
        );
        assert_eq!(
            display_status(&rental(RentalStatus::Returned, due), today),
            ("rental.status.returned", BadgeVariant::Success)
        );
        assert_eq!(
            display_status(&rental(RentalStatus::Reserved, None), today),
            ("rental.status.reserved", BadgeVariant::Neutral)
        );
    }
}
