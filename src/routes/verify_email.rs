//! Verify-email route. The mailed link carries a `token` query parameter that
//! is consumed once on mount; a missing token short-circuits into the error
//! state without touching the network. After a successful verification the
//! page schedules a redirect to the sign-in page and keeps the timer handle,
//! so navigating away first cancels the pending navigation.

use crate::app_lib::query::non_empty;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::{client, form_errors, types::VerifyEmailRequest};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

/// Message for links with no usable token.
const MISSING_TOKEN_MESSAGE: &str = "Invalid verification link.";
/// Fallback when the server gives no interpretable error body.
const VERIFY_FALLBACK: &str = "Email verification failed.";
/// Delay before the post-verification redirect to the sign-in page.
const LOGIN_REDIRECT_MS: u32 = 3_000;

#[derive(Clone, Debug, PartialEq)]
enum VerifyStatus {
    Idle,
    Pending,
    Success,
    Error(String),
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();
    let (status, set_status) = signal(VerifyStatus::Idle);
    let redirect_timer = StoredValue::new_local(None::<Timeout>);

    let verify_action = Action::new_local(move |token: &String| {
        let token = token.clone();
        async move {
            let request = VerifyEmailRequest { token };
            client::verify_email(&request).await
        }
    });

    // Consume the token once on mount; a missing token never reaches the API.
    Effect::new(move |_| {
        if status.get_untracked() != VerifyStatus::Idle {
            return;
        }

        match non_empty(query.with_untracked(|params| params.get("token"))) {
            Some(token) => {
                set_status.set(VerifyStatus::Pending);
                verify_action.dispatch(token);
            }
            None => set_status.set(VerifyStatus::Error(MISSING_TOKEN_MESSAGE.to_string())),
        }
    });

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(()) => {
                    set_status.set(VerifyStatus::Success);
                    let navigate = navigate.clone();
                    redirect_timer.set_value(Some(Timeout::new(LOGIN_REDIRECT_MS, move || {
                        navigate("/login", Default::default());
                    })));
                }
                Err(err) => {
                    set_status.set(VerifyStatus::Error(form_errors::message_for(
                        &err,
                        VERIFY_FALLBACK,
                    )));
                }
            }
        }
    });

    // Dropping the handle cancels a redirect that has not fired yet.
    on_cleanup(move || redirect_timer.set_value(None));

    view! {
        <AppShell>
            <div class="max-w-md mx-auto space-y-6 text-center">
                {move || match status.get() {
                    VerifyStatus::Idle | VerifyStatus::Pending => view! {
                        <div class="space-y-4">
                            <h1 class="text-3xl font-extrabold text-gray-900">
                                "Verifying your email..."
                            </h1>
                            <Spinner />
                        </div>
                    }
                    .into_any(),
                    VerifyStatus::Success => view! {
                        <div class="space-y-4">
                            <h1 class="text-3xl font-extrabold text-gray-900">"Email verified!"</h1>
                            <Alert
                                kind=AlertKind::Success
                                message="Email verified successfully!".to_string()
                            />
                            <p class="text-sm text-gray-600">
                                "Redirecting to sign in page in 3 seconds..."
                            </p>
                        </div>
                    }
                    .into_any(),
                    VerifyStatus::Error(message) => view! {
                        <div class="space-y-4">
                            <h1 class="text-3xl font-extrabold text-gray-900">
                                "Verification failed"
                            </h1>
                            <Alert kind=AlertKind::Error message=message />
                        </div>
                    }
                    .into_any(),
                }}

                <A
                    href="/login"
                    {..}
                    class="inline-block font-medium text-indigo-600 hover:text-indigo-500"
                >
                    "Go to sign in"
                </A>
            </div>
        </AppShell>
    }
}
