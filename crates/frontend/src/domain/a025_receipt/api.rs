//! Receipt service client

use crate::shared::api_utils::api_url;
use crate::shared::config::ApiConfig;
use contracts::domain::a025_receipt::aggregate::Receipt;
use thiserror::Error;

const RECEIPTS_PATH: &str = "/api/admin/receipts";

/// Ошибка загрузки чеков. The UI treats every variant as "fetch failed".
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server responded with HTTP {status}")]
    Http { status: u16 },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// GET all receipts for the admin view
pub async fn fetch_receipts(config: &ApiConfig) -> Result<Vec<Receipt>, FetchError> {
    let url = api_url(config, RECEIPTS_PATH);

    let response = gloo_net::http::Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Http {
            status: response.status(),
        });
    }

    let text = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    decode_receipts(&text)
}

/// Decode the service payload; a single bad record fails the whole response
pub fn decode_receipts(text: &str) -> Result<Vec<Receipt>, FetchError> {
    let receipts: Vec<Receipt> =
        serde_json::from_str(text).map_err(|e| FetchError::Decode(e.to_string()))?;

    for receipt in &receipts {
        if let Err(e) = receipt.validate() {
            log::warn!("{}", e);
        }
    }
    Ok(receipts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_receipts() {
        let json = r#"[
            {"id": "r-1", "booking": {"id": "b-1", "user": {"name": "Ann", "email": "ann@x.io"}, "service": {"name": "Repair"}, "status": "completed"},
             "finalPrice": 10.5, "servicePersonnelName": "Bob", "completionDate": "2024-01-15T14:30:00Z"},
            {"id": "r-2", "booking": {"id": "b-2"}, "finalPrice": 0, "completionDate": "not-a-date"}
        ]"#;
        let receipts = decode_receipts(json).unwrap();
        assert_eq!(receipts.len(), 2);
        assert_eq!(receipts[0].customer_name(), "Ann");
        assert_eq!(receipts[1].completion_date, "not-a-date");
    }

    #[test]
    fn test_null_completion_date_does_not_fail_fetch() {
        let json = r#"[
            {"id": "r-1", "booking": {"id": "b-1"}, "finalPrice": 5, "completionDate": "2024-01-15T14:30:00Z"},
            {"id": "r-2", "booking": {"id": "b-2"}, "finalPrice": 7, "completionDate": null}
        ]"#;
        let receipts = decode_receipts(json).unwrap();
        assert_eq!(receipts.len(), 2);
        assert_eq!(receipts[1].completion_date, "");
        assert_eq!(
            crate::shared::date_utils::format_datetime(&receipts[1].completion_date),
            ""
        );
    }

    #[test]
    fn test_decode_error_message() {
        let err = decode_receipts("{\"error\": true}").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
        assert!(err.to_string().starts_with("Failed to parse response"));
    }

    #[test]
    fn test_http_error_message() {
        let err = FetchError::Http { status: 503 };
        assert_eq!(err.to_string(), "Server responded with HTTP 503");
    }
}
