//! Forgot-password route. Requests a reset email for the given address. The
//! success message is neutral so the page does not confirm account existence.

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::{client, form_errors, types::PasswordResetRequest};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::components::A;

/// Fallback when the server gives no interpretable error body.
const RESET_REQUEST_FALLBACK: &str = "Failed to send the reset email. Please try again.";

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let request_action = Action::new_local(move |email: &String| {
        let email = email.clone();
        async move {
            let request = PasswordResetRequest { email };
            client::password_reset_request(&request).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = request_action.value().get() {
            match result {
                Ok(()) => {
                    set_message.set(Some(
                        "If an account with that email exists, a reset link is on the way."
                            .to_string(),
                    ));
                }
                Err(err) => {
                    set_error.set(Some(form_errors::message_for(&err, RESET_REQUEST_FALLBACK)));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_message.set(None);
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        if email_value.is_empty() {
            set_error.set(Some("Email is required.".to_string()));
            return;
        }

        request_action.dispatch(email_value);
    };

    view! {
        <AppShell>
            <form class="max-w-md mx-auto space-y-6" on:submit=on_submit>
                <div class="text-center">
                    <h1 class="text-3xl font-extrabold text-gray-900">"Forgot your password?"</h1>
                    <p class="mt-2 text-sm text-gray-600">
                        "Enter your email and we will send you a reset link."
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

                <div>
                    <label class="block text-sm font-medium text-gray-700" for="email">
                        "Email address"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class="mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 text-gray-900 focus:border-indigo-500 focus:ring-indigo-500 focus:outline-none sm:text-sm"
                        autocomplete="email"
                        placeholder="Email address"
                        required
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                </div>

                <Button button_type="submit" disabled=request_action.pending()>
                    {move || {
                        if request_action.pending().get() { "Sending..." } else { "Send reset link" }
                    }}
                </Button>

                {move || {
                    request_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="text-center"><Spinner /></div> })
                }}

                <div class="text-center">
                    <A
                        href="/login"
                        {..}
                        class="font-medium text-indigo-600 hover:text-indigo-500"
                    >
                        "Back to sign in"
                    </A>
                </div>
            </form>
        </AppShell>
    }
}
