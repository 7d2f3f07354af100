use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Destructive,
    Ghost,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Primary => "bg-primary-500 text-white hover:bg-primary-600",
            Self::Outline => "bg-white text-neutral-800 border border-neutral-300 hover:bg-neutral-50",
            Self::Destructive => "bg-red-600 text-white hover:bg-red-700",
            Self::Ghost => "bg-transparent text-neutral-600 hover:bg-neutral-100",
        }
    }
}

/// A styled `<button>`. Any extra attribute (`r#type`, `disabled`, `class`...)
/// is forwarded to the element.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = button)]
    attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "inline-flex items-center justify-center gap-2 px-4 py-2 rounded text-sm cursor-pointer disabled:opacity-50 disabled:cursor-not-allowed {variant.class()}",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            ..attributes,
            {children}
        }
    }
}
