//! Registration page view with email/password form.

use api::auth::{register, FormErrors, RegisterForm, RegisterOutcome};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, FieldError, Input, Label};
use ui::{use_alert, use_client, Alert};

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let nav = use_navigator();
    let client = use_client();
    let mut alert = use_alert();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(FormErrors::default);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            let form = RegisterForm::new(username(), password());
            loading.set(true);
            let outcome = register(&client, &form).await;
            loading.set(false);

            errors.set(match &outcome {
                RegisterOutcome::Invalid(e) => e.clone(),
                _ => FormErrors::default(),
            });
            if let Some(a) = Alert::for_register(&outcome) {
                alert.set(Some(a));
            }
            if outcome == RegisterOutcome::Registered {
                nav.push(Route::Login {});
            }
        });
    };

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 bg-white",

            h1 {
                class: "mb-2 text-neutral-800 font-bold text-[1.75rem]",
                "Create Account"
            }

            p {
                class: "mb-8 text-neutral-600 text-[0.9375rem]",
                "Use your email address as the username."
            }

            form {
                onsubmit: handle_register,
                class: "flex flex-col gap-3 w-full max-w-[320px]",

                div {
                    Label { html_for: "register-username", "Username" }
                    Input {
                        id: "register-username",
                        class: "w-full mt-1.5",
                        r#type: "text",
                        placeholder: "you@example.com",
                        invalid: errors().username.is_some(),
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                    FieldError { message: errors().username }
                }

                div {
                    Label { html_for: "register-password", "Password" }
                    Input {
                        id: "register-password",
                        class: "w-full mt-1.5",
                        r#type: "password",
                        placeholder: "8+ characters, mixed case, digit, symbol",
                        invalid: errors().password.is_some(),
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                    FieldError { message: errors().password }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "w-full mt-2 text-[0.9375rem] font-medium",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Register" }
                }
            }

            p {
                class: "mt-6 text-sm text-neutral-600",
                "Already have an account? "
                Link {
                    class: "text-primary-500 no-underline",
                    to: Route::Login {},
                    "Login"
                }
            }
        }
    }
}
