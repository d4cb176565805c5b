//! Auth session state and context for the frontend. The provider hydrates the
//! profile once on mount using a cookie-based API call and exposes derived
//! auth signals for layout and routes. Only non-sensitive profile metadata is
//! stored in memory; session cookies remain `HttpOnly`.

use crate::features::auth::{client, types::UserProfile};
use leptos::{prelude::*, task::spawn_local};

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub profile: RwSignal<Option<UserProfile>>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    /// Builds a context around the provided profile signal.
    fn new(profile: RwSignal<Option<UserProfile>>) -> Self {
        let is_authenticated = Signal::derive(move || profile.get().is_some());
        Self {
            profile,
            is_authenticated,
        }
    }

    /// Updates the in-memory profile after login.
    pub fn set_profile(&self, profile: UserProfile) {
        self.profile.set(Some(profile));
    }

    /// Clears the in-memory profile, typically on logout.
    pub fn clear_profile(&self) {
        self.profile.set(None);
    }
}

/// Provides auth context and hydrates the profile once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let profile = RwSignal::new(None);
    let auth = AuthContext::new(profile);
    provide_context(auth);

    spawn_local(async move {
        if let Ok(Some(profile)) = client::fetch_profile().await {
            auth.set_profile(profile);
        }
    });

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        let profile = RwSignal::new(None);
        AuthContext::new(profile)
    })
}
