//! Interpretation of server error payloads into user-facing messages. The
//! accounts API reports failures in several shapes: per-field string arrays,
//! a `detail` or `error` string, `non_field_errors`, or an arbitrary keyed
//! object. Extraction runs an ordered rule list over the parsed body; the
//! first rule that produces a message wins, and callers supply a per-flow
//! fallback for bodies no rule understands.

use crate::app_lib::AppError;
use serde_json::Value;

/// Substrings that mark a uniqueness violation in field errors.
const DUPLICATE_MARKERS: [&str; 3] = ["already exists", "duplicate", "unique"];

/// Extraction rules in priority order; first match wins.
const RULES: [fn(&Value) -> Option<String>; 7] = [
    email_errors,
    username_errors,
    detail_message,
    error_message,
    password_errors,
    non_field_errors,
    first_field_error,
];

/// Derives the message to display for a failed request. HTTP errors are
/// interpreted through the rule list; transport failures and uninterpretable
/// bodies fall back to the flow's generic message.
pub fn message_for(err: &AppError, fallback: &str) -> String {
    match err {
        AppError::Http { body, .. } => serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|payload| extract(&payload))
            .unwrap_or_else(|| fallback.to_string()),
        AppError::Config(message) => message.clone(),
        _ => fallback.to_string(),
    }
}

/// Runs the rule list over a parsed error payload.
pub fn extract(payload: &Value) -> Option<String> {
    RULES.iter().find_map(|rule| rule(payload))
}

fn email_errors(payload: &Value) -> Option<String> {
    let errors = field_array(payload, "email")?;
    if contains_duplicate_marker(&errors) {
        Some(
            "This email address is already registered. Please use a different email or try logging in."
                .to_string(),
        )
    } else {
        Some(format!("Email: {}", errors.join(", ")))
    }
}

fn username_errors(payload: &Value) -> Option<String> {
    let errors = field_array(payload, "username")?;
    if contains_duplicate_marker(&errors) {
        Some("This username is already taken. Please choose a different username.".to_string())
    } else {
        Some(format!("Username: {}", errors.join(", ")))
    }
}

fn detail_message(payload: &Value) -> Option<String> {
    payload.get("detail")?.as_str().map(str::to_string)
}

fn error_message(payload: &Value) -> Option<String> {
    payload.get("error")?.as_str().map(str::to_string)
}

fn password_errors(payload: &Value) -> Option<String> {
    joined_field(payload, "password")
}

fn non_field_errors(payload: &Value) -> Option<String> {
    joined_field(payload, "non_field_errors")
}

/// Last resort: label the first key in the payload with its first value.
/// Payload key order is preserved by the JSON parser.
fn first_field_error(payload: &Value) -> Option<String> {
    let object = payload.as_object()?;
    let (key, value) = object.iter().next()?;
    let message = match value {
        Value::Array(items) => display_value(items.first()?),
        other => display_value(other),
    };
    Some(format!("{key}: {message}"))
}

/// Field errors as a string array; the API reports per-field validation
/// failures this way. Other shapes are left for later rules.
fn field_array(payload: &Value, field: &str) -> Option<Vec<String>> {
    let items = payload.get(field)?.as_array()?;
    let strings: Vec<String> = items
        .iter()
        .filter_map(|item| item.as_str().map(str::to_string))
        .collect();
    if strings.is_empty() { None } else { Some(strings) }
}

/// A field that may be a string array or a bare string.
fn joined_field(payload: &Value, field: &str) -> Option<String> {
    match payload.get(field)? {
        Value::Array(items) => {
            let strings: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            if strings.is_empty() {
                None
            } else {
                Some(strings.join(", "))
            }
        }
        Value::String(message) => Some(message.clone()),
        _ => None,
    }
}

fn contains_duplicate_marker(errors: &[String]) -> bool {
    errors.iter().any(|error| {
        let lowered = error.to_lowercase();
        DUPLICATE_MARKERS
            .iter()
            .any(|marker| lowered.contains(marker))
    })
}

fn display_value(value: &Value) -> String {
    value
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn http_error(body: &str) -> AppError {
        AppError::Http {
            status: 400,
            body: body.to_string(),
        }
    }

    #[test]
    fn duplicate_email_gets_the_friendly_message() {
        let payload = json!({"email": ["user with this email already exists."]});
        assert_eq!(
            extract(&payload),
            Some(
                "This email address is already registered. Please use a different email or try logging in."
                    .to_string()
            )
        );
    }

    #[test]
    fn duplicate_marker_match_is_case_insensitive() {
        let payload = json!({"email": ["DUPLICATE entry"]});
        assert!(extract(&payload).unwrap().contains("already registered"));
    }

    #[test]
    fn other_email_errors_are_joined_and_labeled() {
        let payload = json!({"email": ["Enter a valid email address.", "This field is required."]});
        assert_eq!(
            extract(&payload),
            Some("Email: Enter a valid email address., This field is required.".to_string())
        );
    }

    #[test]
    fn duplicate_username_gets_the_friendly_message() {
        let payload = json!({"username": ["A user with that username already exists."]});
        assert_eq!(
            extract(&payload),
            Some("This username is already taken. Please choose a different username.".to_string())
        );
    }

    #[test]
    fn detail_is_shown_verbatim() {
        let payload = json!({"detail": "Authentication credentials were not provided."});
        assert_eq!(
            extract(&payload),
            Some("Authentication credentials were not provided.".to_string())
        );
    }

    #[test]
    fn error_key_is_shown_verbatim() {
        let payload = json!({"error": "Token has expired."});
        assert_eq!(extract(&payload), Some("Token has expired.".to_string()));
    }

    #[test]
    fn email_errors_win_over_detail() {
        let payload = json!({
            "email": ["already exists"],
            "detail": "Bad request."
        });
        assert!(extract(&payload).unwrap().contains("already registered"));
    }

    #[test]
    fn password_errors_join_arrays_and_accept_strings() {
        let array = json!({"password": ["This password is too short.", "This password is too common."]});
        assert_eq!(
            extract(&array),
            Some("This password is too short., This password is too common.".to_string())
        );

        let string = json!({"password": "This password is too short."});
        assert_eq!(
            extract(&string),
            Some("This password is too short.".to_string())
        );
    }

    #[test]
    fn non_field_errors_are_joined() {
        let payload = json!({"non_field_errors": ["Unable to log in with provided credentials."]});
        assert_eq!(
            extract(&payload),
            Some("Unable to log in with provided credentials.".to_string())
        );
    }

    #[test]
    fn unknown_fields_fall_back_to_the_first_key_in_payload_order() {
        let payload =
            serde_json::from_str::<Value>(r#"{"zeta": ["boom"], "alpha": ["ignored"]}"#).unwrap();
        assert_eq!(extract(&payload), Some("zeta: boom".to_string()));
    }

    #[test]
    fn non_object_payloads_produce_no_message() {
        assert_eq!(extract(&json!("plain string")), None);
        assert_eq!(extract(&json!({})), None);
    }

    #[test]
    fn message_for_reads_http_bodies() {
        let err = http_error(r#"{"detail": "X"}"#);
        assert_eq!(message_for(&err, "fallback"), "X");
    }

    #[test]
    fn message_for_falls_back_on_unparseable_bodies() {
        let err = http_error("<html>502 Bad Gateway</html>");
        assert_eq!(message_for(&err, "fallback"), "fallback");
    }

    #[test]
    fn message_for_falls_back_on_transport_errors() {
        let err = AppError::Network("connection refused".to_string());
        assert_eq!(
            message_for(&err, "Registration failed. Please try again."),
            "Registration failed. Please try again."
        );
    }
}
