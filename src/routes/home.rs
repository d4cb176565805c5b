//! Landing page. Signed-in users see their profile summary; anonymous
//! visitors get pointers to sign in or create an account.

use crate::app_lib::query::verification_pending_url;
use crate::components::AppShell;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <AppShell>
            {move || match auth.profile.get() {
                Some(profile) => {
                    let pending_url = verification_pending_url(&profile.email);
                    view! {
                        <div class="max-w-md mx-auto space-y-6">
                            <h1 class="text-3xl font-extrabold text-gray-900">"Your account"</h1>
                            <dl class="rounded-lg border border-gray-200 bg-white p-6 space-y-4">
                                <div>
                                    <dt class="text-sm font-medium text-gray-500">"Email"</dt>
                                    <dd class="text-gray-900">{profile.email.clone()}</dd>
                                </div>
                                <div>
                                    <dt class="text-sm font-medium text-gray-500">"Username"</dt>
                                    <dd class="text-gray-900">{profile.username.clone()}</dd>
                                </div>
                            </dl>
                            {(!profile.is_email_verified)
                                .then(|| view! {
                                    <p class="text-sm text-gray-600">
                                        "Your email is not verified yet. "
                                        <A
                                            href={pending_url}
                                            {..}
                                            class="font-medium text-indigo-600 hover:text-indigo-500"
                                        >
                                            "Resend the verification email"
                                        </A>
                                    </p>
                                })}
                        </div>
                    }
                    .into_any()
                }
                None => view! {
                    <div class="max-w-md mx-auto space-y-6 text-center">
                        <h1 class="text-3xl font-extrabold text-gray-900">"Welcome to Gatehouse"</h1>
                        <p class="text-sm text-gray-600">
                            "Sign in to manage your account, or create a new one."
                        </p>
                        <div class="flex items-center justify-center gap-4">
                            <A
                                href="/login"
                                {..}
                                class="rounded-md bg-indigo-600 px-4 py-2 text-sm font-medium text-white hover:bg-indigo-700"
                            >
                                "Sign in"
                            </A>
                            <A
                                href="/register"
                                {..}
                                class="rounded-md border border-gray-300 bg-white px-4 py-2 text-sm font-medium text-gray-700 hover:bg-gray-50"
                            >
                                "Create account"
                            </A>
                        </div>
                    </div>
                }
                .into_any(),
            }}
        </AppShell>
    }
}
