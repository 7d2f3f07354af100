use dioxus::prelude::*;

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "block text-sm font-medium text-neutral-700",
            r#for: "{html_for}",
            {children}
        }
    }
}
