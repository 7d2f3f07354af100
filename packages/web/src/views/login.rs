//! Login page view with email/password form.

use api::auth::{login, FormErrors, LoginForm, LoginOutcome};
use dioxus::prelude::*;
use store::Screen;
use ui::components::{Button, ButtonVariant, FieldError, Input, Label};
use ui::{make_session, use_alert, use_auth, use_client, Alert, AuthState};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    let client = use_client();
    let mut auth = use_auth();
    let mut alert = use_alert();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(FormErrors::default);
    let mut loading = use_signal(|| false);

    // If already logged in, redirect to notes
    use_effect(move || {
        if let Some(target) = make_session().redirect_for(Screen::Login) {
            nav.replace(Route::from(target));
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            let form = LoginForm::new(username(), password());
            loading.set(true);
            let outcome = login(&client, &make_session(), &form).await;
            loading.set(false);

            errors.set(match &outcome {
                LoginOutcome::Invalid(e) => e.clone(),
                _ => FormErrors::default(),
            });
            if let Some(a) = Alert::for_login(&outcome) {
                alert.set(Some(a));
            }
            if let LoginOutcome::SignedIn(user) = outcome {
                auth.set(AuthState { user: Some(user) });
                nav.push(Route::Notes {});
            }
        });
    };

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 bg-white",

            h1 {
                class: "mb-8 text-neutral-800 font-bold text-[1.75rem]",
                "Login"
            }

            form {
                onsubmit: handle_login,
                class: "flex flex-col gap-3 w-full max-w-[320px]",

                div {
                    Label { html_for: "login-username", "Username" }
                    Input {
                        id: "login-username",
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
                    Label { html_for: "login-password", "Password" }
                    Input {
                        id: "login-password",
                        class: "w-full mt-1.5",
                        r#type: "password",
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
                    if loading() { "Signing in..." } else { "Login" }
                }
            }

            p {
                class: "mt-6 text-sm text-neutral-600",
                "Don't have an account? "
                Link {
                    class: "text-primary-500 no-underline",
                    to: Route::Register {},
                    "Register"
                }
            }
        }
    }
}
