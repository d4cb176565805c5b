use std::fmt;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, body: String },
    Parse(String),
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, body } => {
                write!(formatter, "Request failed ({status}): {}", sanitize_body(body))
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
/// The raw body stays available on the variant for payload interpretation.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_display_sanitizes_empty_bodies() {
        let err = AppError::Http {
            status: 502,
            body: "   ".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (502): Request failed.");
    }

    #[test]
    fn http_display_truncates_long_bodies() {
        let err = AppError::Http {
            status: 500,
            body: "x".repeat(1000),
        };
        assert!(err.to_string().len() < 250);
    }
}
