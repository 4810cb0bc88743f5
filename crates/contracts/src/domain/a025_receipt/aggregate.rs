use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Booking
// ============================================================================

/// Клиент, оформивший бронирование
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BookingUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Услуга, по которой было бронирование
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BookingService {
    #[serde(default)]
    pub name: String,
}

/// Бронирование, из которого сформирован чек
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Booking {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub user: BookingUser,
    #[serde(default)]
    pub service: BookingService,
    #[serde(default)]
    pub status: String,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Receipt for a completed booking.
///
/// Read-only on the client: the record shape is owned by the receipt
/// service and mirrored here for deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(alias = "_id")]
    pub id: String,
    pub booking: Booking,
    pub final_price: f64,
    #[serde(default)]
    pub service_personnel_name: String,
    /// Raw timestamp as sent by the service; may be unparseable.
    /// Null or missing becomes "", a number keeps its digits.
    #[serde(default, deserialize_with = "deserialize_raw_timestamp")]
    pub completion_date: String,
}

impl Receipt {
    /// Parsed completion timestamp, `None` if the raw value is not a date
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.completion_date)
    }

    pub fn customer_name(&self) -> &str {
        &self.booking.user.name
    }

    pub fn customer_email(&self) -> &str {
        &self.booking.user.email
    }

    pub fn service_name(&self) -> &str {
        &self.booking.service.name
    }

    pub fn status(&self) -> &str {
        &self.booking.status
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Receipt id must not be empty".into());
        }
        if !self.final_price.is_finite() || self.final_price < 0.0 {
            return Err(format!(
                "Receipt {} has invalid final price {}",
                self.id, self.final_price
            ));
        }
        Ok(())
    }
}

/// Timestamp field as it may arrive on the wire
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Keep the timestamp as display text instead of failing the whole record
fn deserialize_raw_timestamp<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawTimestamp>::deserialize(deserializer)?;
    Ok(match raw {
        None => String::new(),
        Some(RawTimestamp::Text(s)) => s,
        Some(RawTimestamp::Integer(n)) => n.to_string(),
        Some(RawTimestamp::Float(f)) => f.to_string(),
    })
}

/// Naive layouts, read as UTC. `T` or space between date and time,
/// seconds optional.
const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Разбор даты в форматах, которые отдаёт сервис чеков:
/// RFC 3339 (seconds optional), naive date-time (as UTC), `YYYY-MM-DD`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M:%S%.f%:z"] {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    let naive = raw.strip_suffix('Z').unwrap_or(raw);
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(naive, format) {
            return Some(dt.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "_id": "rcpt-001",
        "booking": {
            "_id": "bk-100",
            "user": { "name": "Jane Doe", "email": "jane@example.com" },
            "service": { "name": "Deep Cleaning" },
            "status": "completed"
        },
        "finalPrice": 149.5,
        "servicePersonnelName": "Mike Ross",
        "completionDate": "2024-01-15T14:30:00Z"
    }"#;

    #[test]
    fn test_deserialize_service_payload() {
        let receipt: Receipt = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(receipt.id, "rcpt-001");
        assert_eq!(receipt.booking.id, "bk-100");
        assert_eq!(receipt.customer_name(), "Jane Doe");
        assert_eq!(receipt.customer_email(), "jane@example.com");
        assert_eq!(receipt.service_name(), "Deep Cleaning");
        assert_eq!(receipt.status(), "completed");
        assert_eq!(receipt.final_price, 149.5);
        assert_eq!(receipt.service_personnel_name, "Mike Ross");
    }

    #[test]
    fn test_missing_nested_fields_default() {
        let json = r#"{
            "id": "r-2",
            "booking": { "id": "b-2" },
            "finalPrice": 0,
            "completionDate": "not-a-date"
        }"#;
        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.customer_name(), "");
        assert_eq!(receipt.service_personnel_name, "");
        assert!(receipt.completed_at().is_none());
        assert!(receipt.validate().is_ok());
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
            .and_utc();
        assert_eq!(parse_timestamp("2024-01-15T14:30:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-15T16:30:00+02:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-15T14:30:00.000"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-15 14:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-15 14:30:00.250Z").map(|d| d.timestamp()), Some(expected.timestamp()));
        assert_eq!(parse_timestamp("2024-01-15T14:30Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-15T14:30"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-15T16:30+02:00"), Some(expected));
        assert!(parse_timestamp("2024-01-15").is_some());
        assert!(parse_timestamp("not-a-date").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_completion_date_null_missing_or_numeric() {
        let json = r#"[
            {"id": "r-1", "booking": {"id": "b-1"}, "finalPrice": 1, "completionDate": null},
            {"id": "r-2", "booking": {"id": "b-2"}, "finalPrice": 2},
            {"id": "r-3", "booking": {"id": "b-3"}, "finalPrice": 3, "completionDate": 1705329000000}
        ]"#;
        let receipts: Vec<Receipt> = serde_json::from_str(json).unwrap();
        assert_eq!(receipts[0].completion_date, "");
        assert_eq!(receipts[1].completion_date, "");
        assert_eq!(receipts[2].completion_date, "1705329000000");
        assert!(receipts.iter().all(|r| r.completed_at().is_none()));
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let mut receipt: Receipt = serde_json::from_str(SAMPLE).unwrap();
        receipt.final_price = -1.0;
        assert!(receipt.validate().is_err());

        receipt.final_price = 10.0;
        receipt.id = "  ".into();
        assert!(receipt.validate().is_err());
    }
}
