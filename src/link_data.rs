/// Data structures shared with the NOVAURL backend
use serde::{Deserialize, Serialize};

/// A shortened link as stored by the server.
///
/// The console never edits these records; it only asks the server to
/// create or delete them and re-renders whatever comes back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkRecord {
    pub id: String,
    pub short_code: String,
    pub redirect_url: String,
    pub discord_webhook: String,
    /// Uploaded page served in place of the default redirect page.
    #[serde(default)]
    pub custom_html: Option<String>,
    /// ISO-8601 timestamp, formatted locally for display.
    pub created_at: String,
    #[serde(default)]
    pub click_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_server_record() {
        let json = r#"{
            "id": "6a1f6f3e-9d7c-4f09-a8a4-1d2c3b4a5e6f",
            "short_code": "abc123",
            "redirect_url": "https://example.com",
            "discord_webhook": "https://discord.com/api/webhooks/1/2",
            "custom_html": null,
            "created_at": "2025-06-01T12:34:56+00:00",
            "click_count": 5
        }"#;

        let record: LinkRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.short_code, "abc123");
        assert_eq!(record.redirect_url, "https://example.com");
        assert_eq!(record.click_count, 5);
        assert!(record.custom_html.is_none());
    }

    #[test]
    fn test_parse_record_without_custom_html_field() {
        // Older records omit the field entirely instead of sending null.
        let json = r#"{
            "id": "x",
            "short_code": "zzz999",
            "redirect_url": "https://example.org",
            "discord_webhook": "https://discord.com/api/webhooks/3/4",
            "created_at": "2025-06-02T00:00:00+00:00"
        }"#;

        let record: LinkRecord = serde_json::from_str(json).unwrap();

        assert!(record.custom_html.is_none());
        assert_eq!(record.click_count, 0);
    }

    #[test]
    fn test_parse_record_with_custom_html() {
        let json = r#"{
            "id": "y",
            "short_code": "page01",
            "redirect_url": "https://example.net",
            "discord_webhook": "https://discord.com/api/webhooks/5/6",
            "custom_html": "<html><body>hi</body></html>",
            "created_at": "2025-06-03T08:00:00+00:00",
            "click_count": 0
        }"#;

        let record: LinkRecord = serde_json::from_str(json).unwrap();

        assert_eq!(
            record.custom_html.as_deref(),
            Some("<html><body>hi</body></html>")
        );
    }

    #[test]
    fn test_serialization_round_trip() {
        let record = LinkRecord {
            id: "test-123".to_string(),
            short_code: "abc123".to_string(),
            redirect_url: "https://example.com".to_string(),
            discord_webhook: "https://discord.com/api/webhooks/1/2".to_string(),
            custom_html: None,
            created_at: "2025-06-01T12:34:56+00:00".to_string(),
            click_count: 5,
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: LinkRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, record);
    }
}
