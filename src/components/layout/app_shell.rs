//! Shared layout wrapper with navigation and content container. It centralizes
//! header markup so routes can focus on content. Navigation remains
//! client-side; the backend enforces access control on every endpoint.

use crate::app_lib::build_info;
use crate::features::auth::{client, state::use_auth};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;

    view! {
        <div class="min-h-screen flex flex-col bg-gray-50">
            <header class="border-b border-gray-200 bg-white">
                <div class="max-w-screen-xl flex items-center justify-between mx-auto px-4 py-3">
                    <A href="/" {..} class="flex items-center space-x-2">
                        <span class="text-lg font-semibold text-gray-900">"Gatehouse"</span>
                    </A>
                    <nav class="flex items-center gap-4 text-sm">
                        {move || {
                            if is_authenticated.get() {
                                view! { <SignOutButton /> }.into_any()
                            } else {
                                view! {
                                    <div class="flex items-center gap-4">
                                        <A
                                            href="/login"
                                            {..}
                                            class="font-medium text-indigo-600 hover:text-indigo-500"
                                        >
                                            "Sign in"
                                        </A>
                                        <A
                                            href="/register"
                                            {..}
                                            class="font-medium text-indigo-600 hover:text-indigo-500"
                                        >
                                            "Create account"
                                        </A>
                                    </div>
                                }
                                .into_any()
                            }
                        }}
                    </nav>
                </div>
            </header>
            <main class="flex-1">
                <div class="max-w-screen-xl mx-auto px-4 py-10">{children()}</div>
            </main>
            <footer class="py-6 text-center text-xs text-gray-400">
                {format!(
                    "Gatehouse v{} ({})",
                    env!("CARGO_PKG_VERSION"),
                    build_info::git_commit_hash()
                )}
            </footer>
        </div>
    }
}

/// Clears the server session, drops the in-memory profile, and returns to the
/// sign-in page. Local state is cleared even when the server call fails.
#[component]
fn SignOutButton() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let on_click = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            if let Err(err) = client::logout().await {
                leptos::logging::warn!("Sign out request failed: {err}");
            }
            auth.clear_profile();
            navigate("/login", Default::default());
        });
    };

    view! {
        <button
            type="button"
            class="font-medium text-gray-600 hover:text-gray-900"
            on:click=on_click
        >
            "Sign out"
        </button>
    }
}
