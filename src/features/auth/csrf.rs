//! Anti-forgery token provider for mutating API calls. The backend requires an
//! `X-CSRFToken` header on state-changing requests; the token comes from a
//! dedicated endpoint and is tied to the session cookie. The provider caches
//! the token for the page lifetime and invalidates it after a 403, so the
//! transport layer never has to know where the header comes from.
//!
//! Header attachment is best-effort: when the token endpoint is unreachable
//! the failure is logged and the primary request proceeds without the header.

use crate::app_lib::{AppError, get_json_with_credentials};
use serde::Deserialize;
use std::cell::RefCell;

/// Header carrying the anti-forgery token on mutating requests.
pub const CSRF_HEADER: &str = "X-CSRFToken";

const CSRF_PATH: &str = "/auth/csrf/";

#[derive(Deserialize)]
struct CsrfTokenResponse {
    #[serde(rename = "csrfToken")]
    csrf_token: String,
}

thread_local! {
    static CACHED_TOKEN: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Returns the cached token or fetches a fresh one from the token endpoint.
pub async fn token() -> Result<String, AppError> {
    if let Some(cached) = peek() {
        return Ok(cached);
    }

    let response: CsrfTokenResponse = get_json_with_credentials(CSRF_PATH).await?;
    let fetched = response.csrf_token.trim().to_string();
    if fetched.is_empty() {
        return Err(AppError::Parse(
            "Token endpoint returned an empty token.".to_string(),
        ));
    }
    store(fetched.clone());
    Ok(fetched)
}

/// Builds the header set for a mutating request. Failure to obtain a token is
/// logged and yields an empty set; the primary request still goes out.
pub async fn headers() -> Vec<(String, String)> {
    match token().await {
        Ok(value) => vec![(CSRF_HEADER.to_string(), value)],
        Err(err) => {
            leptos::logging::warn!("Failed to get CSRF token: {err}");
            Vec::new()
        }
    }
}

/// Drops the cached token so the next mutating call fetches a fresh one.
/// Called after the server rejects a request with 403.
pub fn invalidate() {
    CACHED_TOKEN.with(|cell| cell.borrow_mut().take());
}

fn peek() -> Option<String> {
    CACHED_TOKEN.with(|cell| cell.borrow().clone())
}

fn store(token: String) {
    CACHED_TOKEN.with(|cell| *cell.borrow_mut() = Some(token));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_reads_the_camel_case_field() {
        let response: CsrfTokenResponse =
            serde_json::from_str(r#"{"csrfToken":"abc123"}"#).expect("Failed to deserialize");
        assert_eq!(response.csrf_token, "abc123");
    }

    #[test]
    fn cache_round_trips_and_invalidates() {
        assert_eq!(peek(), None);
        store("abc123".to_string());
        assert_eq!(peek(), Some("abc123".to_string()));
        invalidate();
        assert_eq!(peek(), None);
    }
}
