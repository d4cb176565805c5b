//! Auth feature module covering account flows, anti-forgery token handling,
//! server error interpretation, and session hydration. It keeps
//! authentication logic out of the UI and must stay aligned with backend
//! endpoint expectations. This module touches security boundaries and must
//! avoid logging tokens or credentials.
//!
//! Flow Overview: Register creates the account and routes to the pending
//! page; a mailed link carrying a token drives email verification; reset
//! links drive password-reset confirmation. Mutating calls attach the CSRF
//! header when the provider can supply one.

pub(crate) mod client;
pub(crate) mod csrf;
pub(crate) mod form_errors;
pub(crate) mod state;
pub(crate) mod types;
