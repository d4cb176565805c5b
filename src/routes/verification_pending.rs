//! Verification-pending route. Shown after registration with the target email
//! in the query string. The only action is a manual resend; there are no
//! automatic transitions and no redirect. The resend trigger is disabled
//! while a request is outstanding.

use crate::app_lib::query::non_empty;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::{client, form_errors, types::ResendVerificationRequest};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

/// Fallback when the server gives no interpretable error body.
const RESEND_FALLBACK: &str = "Failed to resend verification email.";

#[component]
pub fn VerificationPendingPage() -> impl IntoView {
    let query = use_query_map();
    let email =
        non_empty(query.with_untracked(|params| params.get("email"))).unwrap_or_default();

    let (message, set_message) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let resend_action = Action::new_local(move |email: &String| {
        let email = email.clone();
        async move {
            let request = ResendVerificationRequest { email };
            client::resend_verification(&request).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = resend_action.value().get() {
            match result {
                Ok(()) => {
                    set_message.set(Some("Verification email sent successfully!".to_string()));
                }
                Err(err) => {
                    set_error.set(Some(form_errors::message_for(&err, RESEND_FALLBACK)));
                }
            }
        }
    });

    let email_for_resend = email.clone();
    let on_resend = move |_| {
        set_message.set(None);
        set_error.set(None);

        if email_for_resend.is_empty() {
            set_error.set(Some("Email address is missing from the link.".to_string()));
            return;
        }

        resend_action.dispatch(email_for_resend.clone());
    };

    view! {
        <AppShell>
            <div class="max-w-md mx-auto space-y-6">
                <div class="text-center">
                    <h1 class="text-3xl font-extrabold text-gray-900">"Check your email"</h1>
                    <p class="mt-2 text-sm text-gray-600">
                        "We sent a verification link to "
                        <span class="font-medium text-indigo-600">{email.clone()}</span>
                    </p>
                </div>

                {move || {
                    message
                        .get()
                        .map(|text| view! { <Alert kind=AlertKind::Success message=text /> })
                }}
                {move || {
                    error
                        .get()
                        .map(|text| view! { <Alert kind=AlertKind::Error message=text /> })
                }}

                <div class="space-y-4 text-center">
                    <p class="text-sm text-gray-600">
                        "Click the link in the email to verify your account."
                    </p>

                    <Button disabled=resend_action.pending() on_click=Callback::new(on_resend)>
                        {move || {
                            if resend_action.pending().get() {
                                "Sending..."
                            } else {
                                "Resend verification email"
                            }
                        }}
                    </Button>

                    {move || {
                        resend_action
                            .pending()
                            .get()
                            .then_some(view! { <div><Spinner /></div> })
                    }}

                    <A
                        href="/login"
                        {..}
                        class="inline-block font-medium text-indigo-600 hover:text-indigo-500"
                    >
                        "Back to sign in"
                    </A>
                </div>
            </div>
        </AppShell>
    }
}
