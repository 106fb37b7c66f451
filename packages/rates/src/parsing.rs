//! Field-level parsing for rate table rows.
//!
//! Each function returns `None` for input that is not a data row. None of
//! them fail: header rows and extraction noise are expected in PDF tables.

use std::sync::LazyLock;

use regex::Regex;

/// Digits immediately followed by the month marker (`월`).
static MONTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)월").expect("valid regex"));

/// Digits immediately followed by the day marker (`일`).
static DAY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)일").expect("valid regex"));

/// Returns `true` if `field` is exactly four ASCII digits once surrounding
/// whitespace is trimmed.
#[must_use]
pub fn is_four_digit_year(field: &str) -> bool {
    let year = field.trim();
    year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit())
}

/// Finds the first digit run directly followed by the marker matched by
/// `re`.
fn unit_token<'a>(re: &Regex, fragment: &'a str) -> Option<&'a str> {
    re.captures(fragment)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Builds a `YYYY-MM-DD` date from a year cell and a month/day fragment
/// such as `"11월\x0130일"`.
///
/// Month and day are left-padded to two digits. The result is not checked
/// against the calendar, so `"2월30일"` yields `"{year}-02-30"`.
///
/// Returns `None` if the year is not four digits or either the month or
/// the day token is missing.
#[must_use]
pub fn extract_date(year_field: &str, month_day_field: &str) -> Option<String> {
    if !is_four_digit_year(year_field) {
        return None;
    }

    let year = year_field.trim();
    let month = unit_token(&MONTH_RE, month_day_field)?;
    let day = unit_token(&DAY_RE, month_day_field)?;

    Some(format!("{year}-{month:0>2}-{day:0>2}"))
}

/// Parses a rate cell such as `" 3.50 "` into a number.
///
/// Returns `None` for non-numeric or non-finite content.
#[must_use]
pub fn extract_rate(rate_field: &str) -> Option<f64> {
    rate_field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|rate| rate.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_date_with_control_char_separator() {
        assert_eq!(
            extract_date("2017", "11월\u{1}30일"),
            Some("2017-11-30".to_owned())
        );
    }

    #[test]
    fn pads_single_digit_month_and_day() {
        assert_eq!(extract_date(" 2008 ", "3월 7일"), Some("2008-03-07".to_owned()));
    }

    #[test]
    fn accepts_impossible_calendar_dates() {
        assert_eq!(extract_date("2023", "2월30일"), Some("2023-02-30".to_owned()));
    }

    #[test]
    fn rejects_missing_day_token() {
        assert_eq!(extract_date("2023", "11월"), None);
        assert_eq!(extract_date("2023", ""), None);
    }

    #[test]
    fn rejects_missing_month_token() {
        assert_eq!(extract_date("2023", "30일"), None);
        assert_eq!(extract_date("2023", "11 30일"), None);
    }

    #[test]
    fn finds_tokens_regardless_of_order() {
        assert_eq!(extract_date("2023", "30일 11월"), Some("2023-11-30".to_owned()));
    }

    #[test]
    fn rejects_non_four_digit_year() {
        assert_eq!(extract_date("년도", "1월1일"), None);
        assert_eq!(extract_date("17", "1월1일"), None);
        assert_eq!(extract_date("20170", "1월1일"), None);
    }

    #[test]
    fn year_check_is_ascii_only() {
        assert!(is_four_digit_year("\t1999\n"));
        assert!(!is_four_digit_year("１９９９"));
    }

    #[test]
    fn parses_trimmed_rate() {
        assert_eq!(extract_rate(" 3.50 "), Some(3.5));
        assert_eq!(extract_rate("1.75"), Some(1.75));
    }

    #[test]
    fn rejects_non_numeric_rate() {
        assert_eq!(extract_rate("abc"), None);
        assert_eq!(extract_rate(""), None);
        assert_eq!(extract_rate("금리"), None);
    }

    #[test]
    fn rejects_non_finite_rate() {
        assert_eq!(extract_rate("inf"), None);
        assert_eq!(extract_rate("NaN"), None);
    }
}
