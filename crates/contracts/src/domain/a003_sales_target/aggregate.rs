use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::common::draft::{format_date, non_blank, parse_amount, parse_date, required};
use crate::domain::common::{uuid_aggregate_id, AggregateId, DraftError};
use crate::system::users::UserId;

// ============================================================================
// ID Type
// ============================================================================

uuid_aggregate_id!(
    /// Unique sales target identifier
    SalesTargetId
);

// ============================================================================
// Target type and period
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

/// Inclusive date window a target applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TargetType {
    pub fn code(&self) -> &'static str {
        match self {
            TargetType::Monthly => "monthly",
            TargetType::Quarterly => "quarterly",
            TargetType::Yearly => "yearly",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            TargetType::Monthly => "sales_target.type.monthly",
            TargetType::Quarterly => "sales_target.type.quarterly",
            TargetType::Yearly => "sales_target.type.yearly",
        }
    }

    pub fn all() -> [TargetType; 3] {
        [TargetType::Monthly, TargetType::Quarterly, TargetType::Yearly]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }

    fn months(&self) -> u32 {
        match self {
            TargetType::Monthly => 1,
            TargetType::Quarterly => 3,
            TargetType::Yearly => 12,
        }
    }

    /// Calendar month, quarter or year containing `date`
    pub fn period_containing(&self, date: NaiveDate) -> TargetPeriod {
        let month_start = date - Days::new(u64::from(date.day0()));
        let start = match self {
            TargetType::Monthly => month_start,
            TargetType::Quarterly => month_start - Months::new(date.month0() % 3),
            TargetType::Yearly => month_start - Months::new(date.month0()),
        };
        let end = start + Months::new(self.months()) - Days::new(1);
        TargetPeriod { start, end }
    }
}

// ============================================================================
// Read model
// ============================================================================

/// Sales target of one user. Deleting a target only clears `is_active`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesTarget {
    pub id: SalesTargetId,
    pub user_id: UserId,
    #[serde(default)]
    pub user_name: Option<String>,
    pub target_type: TargetType,
    pub target_amount: f64,
    pub target_period_start: NaiveDate,
    pub target_period_end: NaiveDate,
    pub is_active: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

impl SalesTarget {
    pub fn period(&self) -> TargetPeriod {
        TargetPeriod {
            start: self.target_period_start,
            end: self.target_period_end,
        }
    }
}

/// Create/update request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesTargetPayload {
    pub user_id: UserId,
    pub target_type: TargetType,
    pub target_amount: f64,
    pub target_period_start: NaiveDate,
    pub target_period_end: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Query of the sales target list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesTargetFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<TargetType>,
    pub active_only: bool,
}

impl Default for SalesTargetFilter {
    fn default() -> Self {
        Self {
            target_type: None,
            active_only: true,
        }
    }
}

// ============================================================================
// Form draft
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SalesTargetField {
    UserId,
    TargetAmount,
    PeriodStart,
    PeriodEnd,
    Notes,
}

/// Raw state of the create/edit dialog
#[derive(Debug, Clone, PartialEq)]
pub struct SalesTargetDraft {
    pub user_id: String,
    pub target_type: TargetType,
    pub target_amount: String,
    pub target_period_start: String,
    pub target_period_end: String,
    pub notes: String,
}

impl SalesTargetDraft {
    /// Empty monthly draft for the month containing `today`
    pub fn new(today: NaiveDate) -> Self {
        let mut draft = Self {
            user_id: String::new(),
            target_type: TargetType::Monthly,
            target_amount: String::new(),
            target_period_start: String::new(),
            target_period_end: String::new(),
            notes: String::new(),
        };
        draft.select_target_type(TargetType::Monthly, today);
        draft
    }

    /// Draft pre-filled from an existing target (edit mode)
    pub fn from_target(target: &SalesTarget) -> Self {
        Self {
            user_id: target.user_id.as_string(),
            target_type: target.target_type,
            target_amount: target.target_amount.to_string(),
            target_period_start: format_date(target.target_period_start),
            target_period_end: format_date(target.target_period_end),
            notes: target.notes.clone().unwrap_or_default(),
        }
    }

    /// Switch the type and reset the window to the default period for `today`
    pub fn select_target_type(&mut self, target_type: TargetType, today: NaiveDate) {
        let period = target_type.period_containing(today);
        self.target_type = target_type;
        self.target_period_start = format_date(period.start);
        self.target_period_end = format_date(period.end);
    }

    pub fn field(&self, field: SalesTargetField) -> &str {
        match field {
            SalesTargetField::UserId => &self.user_id,
            SalesTargetField::TargetAmount => &self.target_amount,
            SalesTargetField::PeriodStart => &self.target_period_start,
            SalesTargetField::PeriodEnd => &self.target_period_end,
            SalesTargetField::Notes => &self.notes,
        }
    }

    pub fn set_field(&mut self, field: SalesTargetField, value: String) {
        let slot = match field {
            SalesTargetField::UserId => &mut self.user_id,
            SalesTargetField::TargetAmount => &mut self.target_amount,
            SalesTargetField::PeriodStart => &mut self.target_period_start,
            SalesTargetField::PeriodEnd => &mut self.target_period_end,
            SalesTargetField::Notes => &mut self.notes,
        };
        *slot = value;
    }

    pub fn to_payload(&self) -> Result<SalesTargetPayload, DraftError> {
        let user_id = required("user_id", &self.user_id)?;
        let user_id = UserId::from_string(&user_id).map_err(|_| DraftError::InvalidReference {
            field: "user_id",
            value: user_id,
        })?;
        let target_amount = parse_amount("target_amount", &self.target_amount)?;
        let start = parse_date("target_period_start", &self.target_period_start)?;
        let end = parse_date("target_period_end", &self.target_period_end)?;
        if start > end {
            return Err(DraftError::InvalidPeriod);
        }

        Ok(SalesTargetPayload {
            user_id,
            target_type: self.target_type,
            target_amount,
            target_period_start: start,
            target_period_end: end,
            notes: non_blank(&self.notes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_periods_for_mid_march() {
        let today = date(2024, 3, 15);
        assert_eq!(
            TargetType::Monthly.period_containing(today),
            TargetPeriod {
                start: date(2024, 3, 1),
                end: date(2024, 3, 31)
            }
        );
        assert_eq!(
            TargetType::Quarterly.period_containing(today),
            TargetPeriod {
                start: date(2024, 1, 1),
                end: date(2024, 3, 31)
            }
        );
        assert_eq!(
            TargetType::Yearly.period_containing(today),
            TargetPeriod {
                start: date(2024, 1, 1),
                end: date(2024, 12, 31)
            }
        );
    }

    #[test]
    fn test_period_edges() {
        let leap = TargetType::Monthly.period_containing(date(2024, 2, 29));
        assert_eq!(leap.end, date(2024, 2, 29));

        let q4 = TargetType::Quarterly.period_containing(date(2023, 12, 31));
        assert_eq!(q4.start, date(2023, 10, 1));
        assert_eq!(q4.end, date(2023, 12, 31));

        let q3 = TargetType::Quarterly.period_containing(date(2024, 8, 1));
        assert_eq!(q3.start, date(2024, 7, 1));
        assert_eq!(q3.end, date(2024, 9, 30));
    }

    #[test]
    fn test_selecting_type_resets_window() {
        let today = date(2024, 3, 15);
        let mut draft = SalesTargetDraft::new(today);
        assert_eq!(draft.target_period_start, "2024-03-01");
        assert_eq!(draft.target_period_end, "2024-03-31");

        draft.select_target_type(TargetType::Quarterly, today);
        assert_eq!(draft.target_period_start, "2024-01-01");
        assert_eq!(draft.target_period_end, "2024-03-31");

        draft.select_target_type(TargetType::Yearly, today);
        assert_eq!(draft.target_period_start, "2024-01-01");
        assert_eq!(draft.target_period_end, "2024-12-31");
    }

    #[test]
    fn test_payload_from_filled_draft() {
        let user = UserId::new_v4();
        let mut draft = SalesTargetDraft::new(date(2024, 3, 15));
        draft.set_field(SalesTargetField::UserId, user.as_string());
        draft.set_field(SalesTargetField::TargetAmount, "12 500,00".to_string());

        let payload = draft.to_payload().unwrap();
        assert_eq!(payload.user_id, user);
        assert_eq!(payload.target_amount, 12500.0);
        assert_eq!(payload.target_period_start, date(2024, 3, 1));
        assert_eq!(payload.notes, None);

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("notes").is_none());
        assert_eq!(json["target_type"], "monthly");
        assert_eq!(json["target_period_end"], "2024-03-31");
    }

    #[test]
    fn test_payload_rejects_inverted_period() {
        let mut draft = SalesTargetDraft::new(date(2024, 3, 15));
        draft.user_id = UserId::new_v4().as_string();
        draft.target_amount = "100".to_string();
        draft.target_period_start = "2024-04-01".to_string();
        assert_eq!(draft.to_payload(), Err(DraftError::InvalidPeriod));
    }

    #[test]
    fn test_payload_requires_user() {
        let mut draft = SalesTargetDraft::new(date(2024, 3, 15));
        draft.target_amount = "100".to_string();
        assert_eq!(draft.to_payload(), Err(DraftError::MissingField("user_id")));

        draft.user_id = "nobody".to_string();
        assert!(matches!(
            draft.to_payload(),
            Err(DraftError::InvalidReference { field: "user_id", .. })
        ));
    }

    #[test]
    fn test_edit_draft_round_trips_existing_target() {
        let target = SalesTarget {
            id: SalesTargetId::new_v4(),
            user_id: UserId::new_v4(),
            user_name: Some("Pekka".to_string()),
            target_type: TargetType::Quarterly,
            target_amount: 30000.0,
            target_period_start: date(2024, 4, 1),
            target_period_end: date(2024, 6, 30),
            is_active: true,
            notes: Some("Q2".to_string()),
        };

        let payload = SalesTargetDraft::from_target(&target).to_payload().unwrap();
        assert_eq!(payload.user_id, target.user_id);
        assert_eq!(payload.target_type, TargetType::Quarterly);
        assert_eq!(payload.target_amount, 30000.0);
        assert_eq!(payload.target_period_start, target.target_period_start);
        assert_eq!(payload.target_period_end, target.target_period_end);
        assert_eq!(payload.notes.as_deref(), Some("Q2"));
    }

    #[test]
    fn test_default_filter_is_active_only() {
        let filter = SalesTargetFilter::default();
        assert!(filter.active_only);
        assert_eq!(filter.target_type, None);
    }
}
