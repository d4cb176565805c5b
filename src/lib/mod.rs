//! Shared frontend utilities for API access, configuration, errors, query
//! strings, and build metadata.
//!
//! ## Core authentication flows
//!
//! 1. **Register:** The client POSTs credentials to `/auth/register/` and, on
//!    success, routes to the verification-pending page with the email in the
//!    query string.
//! 2. **Verification:** The user follows an emailed link carrying a `token`
//!    query parameter, which the frontend consumes via `/auth/verify-email/`
//!    before redirecting to the sign-in page.
//! 3. **Password reset:** A reset link carries a `token` consumed via
//!    `/auth/password-reset-confirm/`.
//!
//! Mutating calls carry an anti-forgery header sourced from the CSRF token
//! provider in `features::auth::csrf`. Centralizing these helpers keeps
//! network behavior consistent and avoids duplicated logic in routes.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod query;

pub(crate) use api::{
    get_json_with_credentials, get_optional_json_with_credentials,
    post_empty_with_headers_with_credentials, post_json_with_headers_with_credentials,
};
pub(crate) use errors::AppError;
