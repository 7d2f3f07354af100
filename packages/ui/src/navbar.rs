use dioxus::prelude::*;

use crate::use_auth;

/// Top bar of the notes screen with the signed-in username.
#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();

    rsx! {
        nav {
            class: "flex items-center justify-between px-6 py-3 bg-white border-b border-neutral-200",
            span { class: "font-bold text-neutral-800", "Notes" }
            div {
                class: "flex items-center gap-3 text-sm text-neutral-600",
                if let Some(user) = auth().user {
                    span { "{user}" }
                }
            }
        }
    }
}
