use dioxus::prelude::*;

#[component]
pub fn Input(
    oninput: Option<EventHandler<FormEvent>>,
    /// Marks the field as failing validation.
    #[props(default)]
    invalid: bool,
    #[props(extends = GlobalAttributes)]
    #[props(extends = input)]
    attributes: Vec<Attribute>,
) -> Element {
    let border = if invalid {
        "border-red-500"
    } else {
        "border-neutral-300 focus:border-primary-500"
    };

    rsx! {
        input {
            class: "bg-white border rounded px-3 py-2 text-sm text-neutral-800 outline-none {border}",
            "aria-invalid": invalid,
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
            ..attributes,
        }
    }
}

/// Inline validation message rendered under an input.
#[component]
pub fn FieldError(message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            p { class: "mt-1 text-red-600 text-[0.8125rem]", role: "alert", "{message}" }
        }
    }
}
