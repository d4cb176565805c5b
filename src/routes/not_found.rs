//! Minimalistic 404 page for unknown routes.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

/// Renders a minimal not-found page. Used for top-level route fallbacks.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
                <h1 class="text-9xl font-black text-gray-200 select-none">"404"</h1>
                <p class="text-2xl font-bold text-gray-900">"Page not found"</p>

                <div class="mt-6 space-y-6">
                    <p class="text-gray-500 max-w-sm mx-auto">
                        "The page you requested does not exist."
                    </p>

                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <A
                            href="/"
                            {..}
                            class="inline-flex items-center rounded-md bg-indigo-600 px-5 py-2.5 text-sm font-medium text-white hover:bg-indigo-700"
                        >
                            "Go Home"
                        </A>
                        <button
                            type="button"
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    if let Ok(history) = window.history() {
                                        let _ = history.back();
                                    }
                                }
                            }
                            class="inline-flex items-center rounded-md border border-gray-300 bg-white px-5 py-2.5 text-sm font-medium text-gray-700 hover:bg-gray-50"
                        >
                            "Go Back"
                        </button>
                    </div>
                </div>
            </div>
        </AppShell>
    }
}
