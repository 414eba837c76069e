//! Helpers shared by the form drafts that turn raw input strings into
//! typed request payloads.

use chrono::NaiveDate;
use thiserror::Error;

/// Date format used by `<input type="date">` and by the REST API
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Why a draft could not be turned into a payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
    #[error("`{0}` is not a valid amount")]
    InvalidAmount(String),
    #[error("`{0}` is not a valid date")]
    InvalidDate(String),
    #[error("`{field}` holds an invalid reference: {value}")]
    InvalidReference { field: &'static str, value: String },
    #[error("period start is after period end")]
    InvalidPeriod,
}

impl DraftError {
    /// Translation key of the user-visible message
    pub fn message_key(&self) -> &'static str {
        match self {
            DraftError::MissingField(_) => "error.missing_field",
            DraftError::InvalidAmount(_) => "error.invalid_amount",
            DraftError::InvalidDate(_) => "error.invalid_date",
            DraftError::InvalidReference { .. } => "error.invalid_reference",
            DraftError::InvalidPeriod => "error.invalid_period",
        }
    }
}

/// Trimmed value, or `None` when the input is empty or whitespace only.
///
/// The backend distinguishes an absent key from an empty string, so blank
/// inputs never reach a payload.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn required(field: &'static str, value: &str) -> Result<String, DraftError> {
    non_blank(value).ok_or(DraftError::MissingField(field))
}

pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, DraftError> {
    let value = required(field, value)?;
    NaiveDate::parse_from_str(&value, ISO_DATE_FORMAT).map_err(|_| DraftError::InvalidDate(value))
}

/// Parses a non-negative amount. Spaces are treated as thousands separators
/// and a decimal comma is accepted.
pub fn parse_amount(field: &'static str, value: &str) -> Result<f64, DraftError> {
    let value = required(field, value)?;
    let normalized: String = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    match normalized.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(amount),
        _ => Err(DraftError::InvalidAmount(value)),
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(""), None);
        assert_eq!(non_blank("   \t"), None);
        assert_eq!(non_blank("  Oy Ab  "), Some("Oy Ab".to_string()));
    }

    #[test]
    fn test_required_reports_field() {
        assert_eq!(required("name", " "), Err(DraftError::MissingField("name")));
        assert_eq!(required("name", "Anna"), Ok("Anna".to_string()));
    }

    #[test]
    fn test_parse_amount_accepts_local_formats() {
        assert_eq!(parse_amount("amount", "1500"), Ok(1500.0));
        assert_eq!(parse_amount("amount", "1 500,50"), Ok(1500.5));
        assert_eq!(parse_amount("amount", "0"), Ok(0.0));
    }

    #[test]
    fn test_parse_amount_rejects_invalid() {
        assert_eq!(
            parse_amount("amount", "-5"),
            Err(DraftError::InvalidAmount("-5".to_string()))
        );
        assert_eq!(
            parse_amount("amount", "abc"),
            Err(DraftError::InvalidAmount("abc".to_string()))
        );
        assert_eq!(
            parse_amount("amount", ""),
            Err(DraftError::MissingField("amount"))
        );
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("start", "2024-03-15"),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
        );
        assert_eq!(
            parse_date("start", "15.03.2024"),
            Err(DraftError::InvalidDate("15.03.2024".to_string()))
        );
    }
}
