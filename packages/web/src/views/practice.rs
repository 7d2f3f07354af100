use dioxus::prelude::*;

use crate::Route;

/// Scratch screen with no behavior. Reachable signed in or not.
#[component]
pub fn Practice() -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen gap-4 p-8 text-neutral-600",
            h1 { class: "text-neutral-800 font-bold text-[1.75rem]", "Practice" }
            p { "Nothing here yet." }
            Link { class: "text-primary-500 no-underline", to: Route::Login {}, "Back to login" }
        }
    }
}
