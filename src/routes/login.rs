//! Sign-in route. Establishes a cookie-backed session, hydrates the profile,
//! and lands on the home page. Shows the one-shot confirmation message when
//! arriving from the password-reset flow.

use crate::app_lib::query::non_empty;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::auth::{client, form_errors, types::LoginRequest};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

/// Fallback when the server gives no interpretable error body.
const LOGIN_FALLBACK: &str = "Login failed. Please try again.";

#[derive(Clone)]
/// Captures login form input for the async action without borrowing signals.
struct LoginInput {
    email: String,
    password: String,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let query = use_query_map();
    let info = non_empty(query.with_untracked(|params| params.get("message")));

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let input = input.clone();
        async move {
            let request = LoginRequest {
                email: input.email,
                password: input.password,
            };
            client::login(&request).await?;
            client::fetch_profile().await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(profile) => {
                    if let Some(profile) = profile {
                        auth.set_profile(profile);
                    }
                    navigate("/", Default::default());
                }
                Err(err) => {
                    set_error.set(Some(form_errors::message_for(&err, LOGIN_FALLBACK)));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();

        if email_value.is_empty() || password_value.is_empty() {
            set_error.set(Some("Email and password are required.".to_string()));
            return;
        }

        login_action.dispatch(LoginInput {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <AppShell>
            <form class="max-w-md mx-auto space-y-6" on:submit=on_submit>
                <h1 class="text-center text-3xl font-extrabold text-gray-900">
                    "Sign in to your account"
                </h1>

                {info
                    .map(|message| view! { <Alert kind=AlertKind::Info message=message /> })}
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
                        <label class="block text-sm font-medium text-gray-700" for="password">
                            "Password"
                        </label>
                        <input
                            id="password"
                            type="password"
                            class="mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 text-gray-900 focus:border-indigo-500 focus:ring-indigo-500 focus:outline-none sm:text-sm"
                            autocomplete="current-password"
                            placeholder="Password"
                            required
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                    </div>
                </div>

                <Button button_type="submit" disabled=login_action.pending()>
                    {move || {
                        if login_action.pending().get() { "Signing in..." } else { "Sign in" }
                    }}
                </Button>

                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="text-center"><Spinner /></div> })
                }}

                <div class="flex items-center justify-between text-sm">
                    <A
                        href="/register"
                        {..}
                        class="font-medium text-indigo-600 hover:text-indigo-500"
                    >
                        "Create an account"
                    </A>
                    <A
                        href="/forgot-password"
                        {..}
                        class="font-medium text-indigo-600 hover:text-indigo-500"
                    >
                        "Forgot your password?"
                    </A>
                </div>
            </form>
        </AppShell>
    }
}
