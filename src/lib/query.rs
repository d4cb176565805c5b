//! Pure helpers for query parameters and in-app URLs. Route components read
//! params through the router; the normalization and encoding live here so the
//! token and email guards can be tested natively.

use url::form_urlencoded;

/// Normalizes a query parameter: trims whitespace and rejects empty values.
/// Flows treat an absent and an empty parameter the same way.
pub fn non_empty(value: Option<String>) -> Option<String> {
    let trimmed = value?.trim().to_string();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// Builds the verification-pending URL carrying the registered email.
pub fn verification_pending_url(email: &str) -> String {
    let encoded: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("email", email)
        .finish();
    format!("/verification-pending?{encoded}")
}

/// Builds the login URL carrying a one-shot confirmation message.
pub fn login_url_with_message(message: &str) -> String {
    let encoded: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("message", message)
        .finish();
    format!("/login?{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_rejects_missing_and_blank_values() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("   ".to_string())), None);
        assert_eq!(non_empty(Some(" abc ".to_string())), Some("abc".to_string()));
    }

    #[test]
    fn verification_pending_url_encodes_the_email() {
        assert_eq!(
            verification_pending_url("user+tag@example.com"),
            "/verification-pending?email=user%2Btag%40example.com"
        );
    }

    #[test]
    fn login_url_encodes_the_message() {
        assert_eq!(
            login_url_with_message("Password reset successfully"),
            "/login?message=Password+reset+successfully"
        );
    }
}
