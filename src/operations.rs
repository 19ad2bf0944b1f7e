/// Pure operations over link records and short URLs
use crate::link_data::LinkRecord;

/// Compose the public short URL for a code.
///
/// Short links are served from the same origin as the console, so the
/// display URL is just `<origin>/<short_code>`.
pub fn short_url(origin: &str, short_code: &str) -> String {
    format!("{}/{}", origin.trim_end_matches('/'), short_code)
}

/// Both URL fields must be filled in before a create request is sent.
/// The uploaded page is optional.
pub fn form_is_complete(redirect_url: &str, discord_webhook: &str) -> bool {
    !redirect_url.trim().is_empty() && !discord_webhook.trim().is_empty()
}

/// Remove the record matching `short_code` from a list snapshot.
///
/// Returns whether anything was removed. Short codes are unique
/// server-side, so at most one record can match.
pub fn remove_by_code(links: &mut Vec<LinkRecord>, short_code: &str) -> bool {
    let original_len = links.len();
    links.retain(|link| link.short_code != short_code);
    links.len() < original_len
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_link(short_code: &str, redirect_url: &str, click_count: u64) -> LinkRecord {
        LinkRecord {
            id: format!("id-{}", short_code),
            short_code: short_code.to_string(),
            redirect_url: redirect_url.to_string(),
            discord_webhook: "https://discord.com/api/webhooks/1/2".to_string(),
            custom_html: None,
            created_at: "2025-06-01T12:34:56+00:00".to_string(),
            click_count,
        }
    }

    #[test]
    fn test_short_url_composition() {
        assert_eq!(
            short_url("https://nova.example", "abc123"),
            "https://nova.example/abc123"
        );
    }

    #[test]
    fn test_short_url_trailing_slash_origin() {
        assert_eq!(
            short_url("https://nova.example/", "abc123"),
            "https://nova.example/abc123"
        );
    }

    #[test]
    fn test_short_url_localhost_origin() {
        assert_eq!(
            short_url("http://localhost:3000", "xYz789"),
            "http://localhost:3000/xYz789"
        );
    }

    #[test]
    fn test_form_is_complete() {
        assert!(form_is_complete(
            "https://example.com",
            "https://discord.com/api/webhooks/1/2"
        ));
    }

    #[test]
    fn test_form_requires_both_urls() {
        assert!(!form_is_complete("", "https://discord.com/api/webhooks/1/2"));
        assert!(!form_is_complete("https://example.com", ""));
        assert!(!form_is_complete("", ""));
        assert!(!form_is_complete("   ", "https://discord.com/api/webhooks/1/2"));
    }

    #[test]
    fn test_remove_by_code() {
        let mut links = vec![
            create_test_link("abc123", "https://example.com", 5),
            create_test_link("def456", "https://example.org", 0),
            create_test_link("ghi789", "https://example.net", 12),
        ];

        let removed = remove_by_code(&mut links, "abc123");

        assert!(removed);
        assert_eq!(links.len(), 2);
        assert!(links.iter().all(|l| l.short_code != "abc123"));
        assert_eq!(links[0].short_code, "def456");
        assert_eq!(links[1].short_code, "ghi789");
    }

    #[test]
    fn test_remove_by_code_miss_leaves_list_unchanged() {
        let mut links = vec![
            create_test_link("abc123", "https://example.com", 5),
            create_test_link("def456", "https://example.org", 0),
        ];

        let removed = remove_by_code(&mut links, "nonexistent");

        assert!(!removed);
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn test_remove_by_code_empty_list() {
        let mut links: Vec<LinkRecord> = Vec::new();

        assert!(!remove_by_code(&mut links, "abc123"));
        assert!(links.is_empty());
    }
}
