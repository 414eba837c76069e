use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a001_customer::CustomerId;
use crate::domain::common::uuid_aggregate_id;

// ============================================================================
// ID Types
// ============================================================================

uuid_aggregate_id!(
    /// Unique rental identifier
    RentalId
);

uuid_aggregate_id!(
    /// Identifier of the rented machine
    RentalMachineId
);

// ============================================================================
// Status
// ============================================================================

/// Persisted rental status. The overdue flag shown in the UI is derived
/// separately by [`Rental::is_overdue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalStatus {
    Active,
    Reserved,
    Returned,
    Overdue,
    Cancelled,
}

impl RentalStatus {
    pub fn code(&self) -> &'static str {
        match self {
            RentalStatus::Active => "active",
            RentalStatus::Reserved => "reserved",
            RentalStatus::Returned => "returned",
            RentalStatus::Overdue => "overdue",
            RentalStatus::Cancelled => "cancelled",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            RentalStatus::Active => "rental.status.active",
            RentalStatus::Reserved => "rental.status.reserved",
            RentalStatus::Returned => "rental.status.returned",
            RentalStatus::Overdue => "rental.status.overdue",
            RentalStatus::Cancelled => "rental.status.cancelled",
        }
    }

    pub fn all() -> [RentalStatus; 5] {
        [
            RentalStatus::Active,
            RentalStatus::Reserved,
            RentalStatus::Returned,
            RentalStatus::Overdue,
            RentalStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    /// Returned and cancelled rentals can no longer become overdue
    pub fn is_closed(&self) -> bool {
        matches!(self, RentalStatus::Returned | RentalStatus::Cancelled)
    }
}

// ============================================================================
// Read model
// ============================================================================

/// Rental as returned by the backend.
///
/// `rental_machine_id`, `customer_id` and `rental_start_date` never change
/// after creation. The customer and machine fields at the bottom are joined
/// in by the backend and are display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    pub id: RentalId,
    pub rental_machine_id: RentalMachineId,
    pub customer_id: CustomerId,
    pub rental_start_date: NaiveDate,
    /// Agreed return date
    #[serde(default)]
    pub planned_end_date: Option<NaiveDate>,
    /// Actual return date
    #[serde(default)]
    pub rental_end_date: Option<NaiveDate>,
    pub rental_status: RentalStatus,
    #[serde(default)]
    pub daily_rate: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_address: Option<String>,
    #[serde(default)]
    pub machine_model: Option<String>,
    #[serde(default)]
    pub machine_serial: Option<String>,
}

impl Rental {
    pub fn due_date(&self) -> Option<NaiveDate> {
        self.planned_end_date
    }

    /// True while the rental is open and its due date lies strictly before
    /// `today`. Recomputed on every render, never persisted.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.rental_status.is_closed() && self.due_date().is_some_and(|due| due < today)
    }

    /// Whole days from the start date to the return date, or to `today`
    /// while the machine is still out. Never negative.
    pub fn duration_days(&self, today: NaiveDate) -> i64 {
        let end = self.rental_end_date.unwrap_or(today);
        (end - self.rental_start_date).num_days().max(0)
    }
}

/// Query of the rental list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RentalStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rental(status: RentalStatus, due: Option<NaiveDate>) -> Rental {
        Rental {
            id: RentalId::new_v4(),
            rental_machine_id: RentalMachineId::new_v4(),
            customer_id: CustomerId::new_v4(),
            rental_start_date: date(2024, 3, 1),
            planned_end_date: due,
            rental_end_date: None,
            rental_status: status,
            daily_rate: Some(45.0),
            notes: None,
            customer_name: Some("Matti Meikäläinen".to_string()),
            customer_address: None,
            machine_model: Some("Husqvarna K 770".to_string()),
            machine_serial: None,
        }
    }

    #[test]
    fn test_open_rental_past_due_is_overdue() {
        let today = date(2024, 3, 15);
        for status in [
            RentalStatus::Active,
            RentalStatus::Reserved,
            RentalStatus::Overdue,
        ] {
            assert!(rental(status, Some(date(2024, 3, 14))).is_overdue(today));
        }
    }

    #[test]
    fn test_closed_rental_is_never_overdue() {
        let today = date(2024, 3, 15);
        for status in [RentalStatus::Returned, RentalStatus::Cancelled] {
            assert!(!rental(status, Some(date(2024, 1, 1))).is_overdue(today));
        }
    }

    #[test]
    fn test_due_today_or_later_is_not_overdue() {
        let today = date(2024, 3, 15);
        assert!(!rental(RentalStatus::Active, Some(today)).is_overdue(today));
        assert!(!rental(RentalStatus::Active, Some(date(2024, 4, 1))).is_overdue(today));
        assert!(!rental(RentalStatus::Active, None).is_overdue(today));
    }

    #[test]
    fn test_duration_uses_today_while_open() {
        let r = rental(RentalStatus::Active, None);
        assert_eq!(r.duration_days(date(2024, 3, 15)), 14);
        assert_eq!(r.duration_days(date(2024, 3, 1)), 0);
        assert_eq!(r.duration_days(date(2024, 2, 20)), 0);
    }

    #[test]
    fn test_duration_uses_return_date_when_returned() {
        let mut r = rental(RentalStatus::Returned, None);
        r.rental_end_date = Some(date(2024, 3, 4));
        assert_eq!(r.duration_days(date(2024, 12, 31)), 3);
    }

    #[test]
    fn test_status_codes_round_trip() {
        for status in RentalStatus::all() {
            assert_eq!(RentalStatus::from_code(status.code()), Some(status));
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, status.code());
        }
        assert_eq!(RentalStatus::from_code("lost"), None);
    }

    #[test]
    fn test_unknown_status_is_rejected_at_the_boundary() {
        let json = serde_json::json!({
            "id": "7f1c1a5e-4a9f-4f5e-9a0b-2c3d4e5f6a7b",
            "rental_machine_id": "1f1c1a5e-4a9f-4f5e-9a0b-2c3d4e5f6a7b",
            "customer_id": "2f1c1a5e-4a9f-4f5e-9a0b-2c3d4e5f6a7b",
            "rental_start_date": "2024-03-01",
            "rental_status": "lost"
        });
        assert!(serde_json::from_value::<Rental>(json).is_err());
    }
}
