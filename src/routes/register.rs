//! Register route. It validates inputs locally, submits the credentials
//! payload, and on success hands the email off to the verification-pending
//! page. Server-side failures are interpreted through the error rule chain so
//! duplicate accounts get a friendly message.

use crate::app_lib::query::verification_pending_url;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::{client, form_errors, types::RegisterRequest};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

/// Fallback when the server gives no interpretable error body.
const REGISTER_FALLBACK: &str = "Registration failed. Please try again.";

#[derive(Clone)]
/// Captures register form input for the async action without borrowing signals.
struct RegisterInput {
    email: String,
    username: String,
    password: String,
    password_confirm: String,
}

/// Renders the registration form and drives the register flow.
/// On success it routes to the pending page carrying the email.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (password_confirm, set_password_confirm) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let register_action = Action::new_local(move |input: &RegisterInput| {
        let input = input.clone();
        async move {
            let request = RegisterRequest {
                email: input.email.clone(),
                username: input.username,
                password: input.password,
                password_confirm: input.password_confirm,
            };
            client::register(&request).await.map(|()| input.email)
        }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(email_value) => {
                    navigate(&verification_pending_url(&email_value), Default::default());
                }
                Err(err) => {
                    set_error.set(Some(form_errors::message_for(&err, REGISTER_FALLBACK)));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let username_value = username.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        let confirm_value = password_confirm.get_untracked();

        if email_value.is_empty()
            || username_value.is_empty()
            || password_value.is_empty()
            || confirm_value.is_empty()
        {
            set_error.set(Some("All fields are required.".to_string()));
            return;
        }

        if password_value != confirm_value {
            set_error.set(Some("Passwords do not match.".to_string()));
            return;
        }

        register_action.dispatch(RegisterInput {
            email: email_value,
            username: username_value,
            password: password_value,
            password_confirm: confirm_value,
        });
    };

    view! {
        <AppShell>
            <form class="max-w-md mx-auto space-y-6" on:submit=on_submit>
                <h1 class="text-center text-3xl font-extrabold text-gray-900">
                    "Create your account"
                </h1>

                {move || {
                    error
                        .get()
                        .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                }}

                <div class="space-y-4">
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
                    <div>
                        <label class="block text-sm font-medium text-gray-700" for="username">
                            "Username"
                        </label>
                        <input
                            id="username"
                            type="text"
                            class="mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 text-gray-900 focus:border-indigo-500 focus:ring-indigo-500 focus:outline-none sm:text-sm"
                            autocomplete="username"
                            placeholder="Username"
                            required
                            on:input=move |event| set_username.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700" for="password">
                            "Password"
                        </label>
                        <input
                            id="password"
                            type="password"
                            class="mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 text-gray-900 focus:border-indigo-500 focus:ring-indigo-500 focus:outline-none sm:text-sm"
                            autocomplete="new-password"
                            placeholder="Password"
                            required
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700" for="password_confirm">
                            "Confirm password"
                        </label>
                        <input
                            id="password_confirm"
                            type="password"
                            class="mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 text-gray-900 focus:border-indigo-500 focus:ring-indigo-500 focus:outline-none sm:text-sm"
                            autocomplete="new-password"
                            placeholder="Confirm password"
                            required
                            on:input=move |event| {
                                set_password_confirm.set(event_target_value(&event));
                            }
                        />
                    </div>
                </div>

                <Button button_type="submit" disabled=register_action.pending()>
                    {move || {
                        if register_action.pending().get() {
                            "Creating account..."
                        } else {
                            "Create account"
                        }
                    }}
                </Button>

                {move || {
                    register_action
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
                        "Already have an account? Sign in"
                    </A>
                </div>
            </form>
        </AppShell>
    }
}
