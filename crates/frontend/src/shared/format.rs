//! Display formatting for money and dates

use chrono::NaiveDate;

use crate::shared::i18n::Locale;

/// Format a number with a space as thousands separator and the given
/// number of decimals.
///
/// ```
/// # use rental_frontend::shared::format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Euro amount with two decimals in the locale's notation,
/// "12 500.00 €" in English and "12 500,00 €" in Finnish
pub fn format_money(value: f64, locale: Locale) -> String {
    let number = format_number_with_decimals(value, 2);
    match locale.decimal_separator() {
        '.' => format!("{} €", number),
        sep => format!("{} €", number.replacen('.', &sep.to_string(), 1)),
    }
}

/// DD.MM.YYYY
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56, Locale::En), "1 234.56 €");
        assert_eq!(format_money(1234567.891, Locale::En), "1 234 567.89 €");
        assert_eq!(format_money(0.0, Locale::En), "0.00 €");
        assert_eq!(format_money(-1234.5, Locale::En), "-1 234.50 €");
        assert_eq!(format_money(999.0, Locale::En), "999.00 €");
    }

    #[test]
    fn test_format_money_finnish_uses_decimal_comma() {
        assert_eq!(format_money(12500.0, Locale::Fi), "12 500,00 €");
        assert_eq!(format_money(-0.5, Locale::Fi), "-0,50 €");
    }

    #[test]
    fn test_format_integer() {
        assert_eq!(format_number_with_decimals(1000000.0, 0), "1 000 000");
        assert_eq!(format_number_with_decimals(12.0, 0), "12");
    }

    #[test]
    fn test_format_dates() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(d), "05.03.2024");
        assert_eq!(format_optional_date(None), "-");
    }
}
