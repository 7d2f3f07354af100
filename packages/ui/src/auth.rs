//! Signed-in user context.

use dioxus::prelude::*;

use crate::make_session;

/// Who is signed in, mirrored from the session flag so the navbar re-renders
/// when it changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<String>,
}

/// Get the current authentication state.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Seeds [`AuthState`] from the stored session flag on mount.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    use_context_provider(|| {
        Signal::new(AuthState {
            user: make_session().current_user(),
        })
    });

    rsx! {
        {children}
    }
}
