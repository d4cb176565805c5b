//! Request and response types for auth-related API calls. These payloads carry
//! credentials and one-time tokens, so they must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    pub password_confirm: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyEmailRequest {
    pub token: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResendVerificationRequest {
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PasswordResetConfirmRequest {
    pub token: String,
    pub password: String,
    pub password_confirm: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Profile summary returned by the API to hydrate auth state.
/// This mirrors cookie-backed session state and contains no secrets.
pub struct UserProfile {
    pub email: String,
    pub username: String,
    pub is_email_verified: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_uses_snake_case_field_names() {
        let request = RegisterRequest {
            email: "a@b.c".to_string(),
            username: "ab".to_string(),
            password: "secret".to_string(),
            password_confirm: "secret".to_string(),
        };

        let json = serde_json::to_string(&request).expect("Failed to serialize");
        assert!(json.contains("\"password_confirm\""));
    }

    #[test]
    fn user_profile_round_trips() {
        let json = r#"{"email":"a@b.c","username":"ab","is_email_verified":false}"#;
        let profile: UserProfile = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(profile.email, "a@b.c");
        assert!(!profile.is_email_verified);
    }
}
