//! Client wrappers for the accounts API endpoints. These helpers centralize
//! anti-forgery header attachment and session-aware requests, keeping auth
//! flows consistent and token handling out of route code.

use crate::{
    app_lib::{
        AppError, get_optional_json_with_credentials, post_empty_with_headers_with_credentials,
        post_json_with_headers_with_credentials,
    },
    features::auth::{
        csrf,
        types::{
            LoginRequest, PasswordResetConfirmRequest, PasswordResetRequest, RegisterRequest,
            ResendVerificationRequest, UserProfile, VerifyEmailRequest,
        },
    },
};
use serde::Serialize;

/// Creates an account; the server sends the verification email.
pub async fn register(request: &RegisterRequest) -> Result<(), AppError> {
    post_with_csrf("/auth/register/", request).await
}

/// Establishes a cookie-backed session.
pub async fn login(request: &LoginRequest) -> Result<(), AppError> {
    post_with_csrf("/auth/login/", request).await
}

/// Clears the current session on the server.
pub async fn logout() -> Result<(), AppError> {
    let headers = csrf::headers().await;
    let result = post_empty_with_headers_with_credentials("/auth/logout/", &headers).await;
    invalidate_on_rejection(&result);
    result
}

/// Consumes a one-time email verification token.
/// The token must never be logged.
pub async fn verify_email(request: &VerifyEmailRequest) -> Result<(), AppError> {
    post_with_csrf("/auth/verify-email/", request).await
}

/// Requests a new verification email for the given address.
pub async fn resend_verification(request: &ResendVerificationRequest) -> Result<(), AppError> {
    post_with_csrf("/auth/resend-verification/", request).await
}

/// Triggers a password-reset email without confirming account existence.
pub async fn password_reset_request(request: &PasswordResetRequest) -> Result<(), AppError> {
    post_with_csrf("/auth/password-reset-request/", request).await
}

/// Finalizes a password reset with the mailed token.
/// The token must never be logged.
pub async fn password_reset_confirm(
    request: &PasswordResetConfirmRequest,
) -> Result<(), AppError> {
    post_with_csrf("/auth/password-reset-confirm/", request).await
}

/// Fetches the current user's profile using cookie-based auth.
/// Returns `None` when the session is missing or expired.
pub async fn fetch_profile() -> Result<Option<UserProfile>, AppError> {
    get_optional_json_with_credentials("/auth/profile/").await
}

/// Posts JSON with the anti-forgery header attached when obtainable.
async fn post_with_csrf<B: Serialize>(path: &str, body: &B) -> Result<(), AppError> {
    let headers = csrf::headers().await;
    let result = post_json_with_headers_with_credentials(path, body, &headers).await;
    invalidate_on_rejection(&result);
    result
}

/// A 403 means the token the server saw was stale or missing; drop the cache
/// so the next mutating call fetches a fresh one.
fn invalidate_on_rejection(result: &Result<(), AppError>) {
    if let Err(AppError::Http { status: 403, .. }) = result {
        csrf::invalidate();
    }
}
