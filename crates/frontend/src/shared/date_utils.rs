/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

fn parse_datetime(datetime_str: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        return Some(dt.naive_utc());
    }
    // Backend timestamps sometimes come without an offset.
    NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

fn parse_date(date_str: &str) -> Option<NaiveDate> {
    if let Some(dt) = parse_datetime(date_str) {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok()
}

/// Format ISO datetime string to DD.MM.YYYY HH:MM format
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    match parse_datetime(datetime_str) {
        Some(dt) => dt.format("%d.%m.%Y %H:%M").to_string(),
        None => datetime_str.to_string(),
    }
}

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    match parse_date(date_str) {
        Some(date) => date.format("%d.%m.%Y").to_string(),
        None => date_str.to_string(),
    }
}

/// "YYYY-MM" bucket of an ISO timestamp, used to group operations per month.
pub fn month_key(datetime_str: &str) -> Option<String> {
    parse_date(datetime_str).map(|date| format!("{:04}-{:02}", date.year(), date.month()))
}

/// Short month label for chart axes: "2024-03" -> "Mar 24".
pub fn month_label(key: &str) -> String {
    let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", key), "%Y-%m-%d") else {
        return key.to_string();
    };
    date.format("%b %y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15.03.2024 14:02"
        );
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31.12.2024 23:59");
        assert_eq!(format_datetime("2024-03-15T14:02:26"), "15.03.2024 14:02");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_month_key_and_label() {
        assert_eq!(
            month_key("2024-03-15T14:02:26Z"),
            Some("2024-03".to_string())
        );
        assert_eq!(month_key("garbage"), None);
        assert_eq!(month_label("2024-03"), "Mar 24");
        assert_eq!(month_label("2024-13"), "2024-13");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
