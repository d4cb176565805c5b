//! Reset-password route. The mailed link carries a `token` query parameter
//! read once on mount; without it the form is unusable and submission
//! short-circuits before any network call, regardless of form validity. A
//! successful reset routes back to sign-in with a confirmation message.

use crate::app_lib::query::{login_url_with_message, non_empty};
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::{client, form_errors, types::PasswordResetConfirmRequest};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

/// Message for links with no usable token.
const MISSING_TOKEN_MESSAGE: &str = "Invalid reset link.";
/// Fallback when the server gives no interpretable error body.
const RESET_FALLBACK: &str = "Failed to reset password.";
/// Confirmation handed to the sign-in page after a successful reset.
const RESET_CONFIRMATION: &str = "Password reset successfully";

#[derive(Clone)]
/// Captures reset form input for the async action without borrowing signals.
struct ResetInput {
    token: String,
    password: String,
    password_confirm: String,
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();
    let token = non_empty(query.with_untracked(|params| params.get("token")));
    let has_token = token.is_some();

    let (password, set_password) = signal(String::new());
    let (password_confirm, set_password_confirm) = signal(String::new());
    let (error, set_error) = signal(if has_token {
        None
    } else {
        Some(MISSING_TOKEN_MESSAGE.to_string())
    });

    let reset_action = Action::new_local(move |input: &ResetInput| {
        let input = input.clone();
        async move {
            let request = PasswordResetConfirmRequest {
                token: input.token,
                password: input.password,
                password_confirm: input.password_confirm,
            };
            client::password_reset_confirm(&request).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = reset_action.value().get() {
            match result {
                Ok(()) => {
                    navigate(
                        &login_url_with_message(RESET_CONFIRMATION),
                        Default::default(),
                    );
                }
                Err(err) => {
                    set_error.set(Some(form_errors::message_for(&err, RESET_FALLBACK)));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        // Without a token the flow never reaches the API.
        let Some(token_value) = token.clone() else {
            set_error.set(Some(MISSING_TOKEN_MESSAGE.to_string()));
            return;
        };

        let password_value = password.get_untracked();
        let confirm_value = password_confirm.get_untracked();

        if password_value.is_empty() || confirm_value.is_empty() {
            set_error.set(Some("Both password fields are required.".to_string()));
            return;
        }

        if password_value != confirm_value {
            set_error.set(Some("Passwords do not match.".to_string()));
            return;
        }

        reset_action.dispatch(ResetInput {
            token: token_value,
            password: password_value,
            password_confirm: confirm_value,
        });
    };

    let submit_disabled = Signal::derive(move || !has_token || reset_action.pending().get());

    view! {
        <AppShell>
            <form class="max-w-md mx-auto space-y-6" on:submit=on_submit>
                <div class="text-center">
                    <h1 class="text-3xl font-extrabold text-gray-900">"Reset your password"</h1>
                    <p class="mt-2 text-sm text-gray-600">"Enter your new password below."</p>
                </div>

                {move || {
                    error
                        .get()
                        .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                }}

                <div class="space-y-4">
                    <div>
                        <label class="block text-sm font-medium text-gray-700" for="password">
                            "New Password"
                        </label>
                        <input
                            id="password"
                            type="password"
                            class="mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 text-gray-900 focus:border-indigo-500 focus:ring-indigo-500 focus:outline-none sm:text-sm"
                            autocomplete="new-password"
                            placeholder="New password"
                            required
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700" for="password_confirm">
                            "Confirm New Password"
                        </label>
                        <input
                            id="password_confirm"
                            type="password"
                            class="mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 text-gray-900 focus:border-indigo-500 focus:ring-indigo-500 focus:outline-none sm:text-sm"
                            autocomplete="new-password"
                            placeholder="Confirm new password"
                            required
                            on:input=move |event| {
                                set_password_confirm.set(event_target_value(&event));
                            }
                        />
                    </div>
                </div>

                <Button button_type="submit" disabled=submit_disabled>
                    {move || {
                        if reset_action.pending().get() {
                            "Resetting..."
                        } else {
                            "Reset password"
                        }
                    }}
                </Button>

                {move || {
                    reset_action
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
