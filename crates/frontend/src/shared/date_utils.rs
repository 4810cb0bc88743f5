/// Utilities for date and time formatting
///
/// Display format is fixed to en-US regardless of browser locale.
use contracts::domain::a025_receipt::aggregate::parse_timestamp;

/// Format a timestamp string as "Jan 15, 2024, 02:30 PM" (UTC)
///
/// Unparseable input is returned unchanged so a single bad field
/// never breaks the table.
pub fn format_datetime(datetime_str: &str) -> String {
    match parse_timestamp(datetime_str) {
        Some(dt) => dt.format("%b %-d, %Y, %I:%M %p").to_string(),
        None => datetime_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-01-15T14:30:00Z"),
            "Jan 15, 2024, 02:30 PM"
        );
        assert_eq!(
            format_datetime("2024-12-31T23:59:59.123Z"),
            "Dec 31, 2024, 11:59 PM"
        );
        assert_eq!(format_datetime("2024-03-05"), "Mar 5, 2024, 12:00 AM");
        assert_eq!(
            format_datetime("2024-01-15 14:30:00"),
            "Jan 15, 2024, 02:30 PM"
        );
        assert_eq!(format_datetime("2024-01-15T14:30Z"), "Jan 15, 2024, 02:30 PM");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("not-a-date"), "not-a-date");
        assert_eq!(format_datetime(""), "");
    }
}
