//! # Modal alerts
//!
//! One dialog at a time, owned by [`AlertProvider`] near the root so it
//! survives navigation (registration shows its confirmation while the router
//! moves to the login screen). Screens push an [`Alert`] with [`use_alert`].
//!
//! The `for_*` constructors hold every title and message the app shows:
//!
//! | Outcome | Title | Icon | Message |
//! |---------|-------|------|---------|
//! | login rejected | Invalid User | error | Please Enter correct Username or Password |
//! | username taken | User Already Exist | error | This username already exist |
//! | registered | Registered Successfully | success | You have been Registered |
//! | registration failed | Something went Wrong | error | Internal Server Error |
//! | insert with empty input | Note is Empty | error | Please Enter Your Note |
//! | update with empty input | Note is Empty | error | Please Change something to Update |
//! | note updated | Updated | success | Data Updated Successfully |

use api::auth::{LoginOutcome, RegisterOutcome};
use api::BoardOutcome;
use dioxus::prelude::*;

use crate::components::{Button, ModalOverlay};
use crate::icons::{FaCircleCheck, FaCircleXmark};
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertIcon {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub icon: AlertIcon,
    pub message: &'static str,
}

impl Alert {
    pub const fn error(title: &'static str, message: &'static str) -> Self {
        Self {
            title,
            icon: AlertIcon::Error,
            message,
        }
    }

    pub const fn success(title: &'static str, message: &'static str) -> Self {
        Self {
            title,
            icon: AlertIcon::Success,
            message,
        }
    }

    /// Only a rejected login is announced; field errors render inline and a
    /// successful login navigates away.
    pub fn for_login(outcome: &LoginOutcome) -> Option<Self> {
        match outcome {
            LoginOutcome::Rejected => Some(Self::error(
                "Invalid User",
                "Please Enter correct Username or Password",
            )),
            LoginOutcome::Invalid(_) | LoginOutcome::SignedIn(_) => None,
        }
    }

    pub fn for_register(outcome: &RegisterOutcome) -> Option<Self> {
        match outcome {
            RegisterOutcome::AlreadyExists => Some(Self::error(
                "User Already Exist",
                "This username already exist",
            )),
            RegisterOutcome::Registered => Some(Self::success(
                "Registered Successfully",
                "You have been Registered",
            )),
            RegisterOutcome::Failed => Some(Self::error(
                "Something went Wrong",
                "Internal Server Error",
            )),
            RegisterOutcome::Invalid(_) => None,
        }
    }

    /// Remote failures on the notes screen are only logged.
    pub fn for_board(outcome: BoardOutcome) -> Option<Self> {
        match outcome {
            BoardOutcome::EmptyNote => Some(Self::error("Note is Empty", "Please Enter Your Note")),
            BoardOutcome::EmptyUpdate => Some(Self::error(
                "Note is Empty",
                "Please Change something to Update",
            )),
            BoardOutcome::Updated => Some(Self::success("Updated", "Data Updated Successfully")),
            BoardOutcome::Done | BoardOutcome::NothingSelected | BoardOutcome::Failed => None,
        }
    }
}

/// Handle to the app-wide dialog slot.
pub fn use_alert() -> Signal<Option<Alert>> {
    use_context::<Signal<Option<Alert>>>()
}

/// Owns the dialog slot and renders the current alert above `children`.
#[component]
pub fn AlertProvider(children: Element) -> Element {
    let alert = use_context_provider(|| Signal::new(Option::<Alert>::None));

    rsx! {
        {children}
        AlertDialog { alert }
    }
}

#[component]
fn AlertDialog(alert: Signal<Option<Alert>>) -> Element {
    let Some(current) = alert() else {
        return rsx! {};
    };
    let mut alert = alert;

    rsx! {
        ModalOverlay {
            on_close: move |_| alert.set(None),
            div {
                class: "flex justify-center mb-4",
                if current.icon == AlertIcon::Success {
                    Icon { class: "text-green-600", icon: FaCircleCheck, width: 48, height: 48 }
                } else {
                    Icon { class: "text-red-600", icon: FaCircleXmark, width: 48, height: 48 }
                }
            }
            h2 { class: "m-0 mb-2 text-lg font-semibold text-neutral-800", "{current.title}" }
            p { class: "mb-5 text-neutral-600 text-sm", "{current.message}" }
            Button {
                onclick: move |_| alert.set(None),
                "Okay"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::auth::{FormErrors, LoginForm};

    #[test]
    fn test_login_alerts() {
        let rejected = Alert::for_login(&LoginOutcome::Rejected).unwrap();
        assert_eq!(rejected.title, "Invalid User");
        assert_eq!(rejected.icon, AlertIcon::Error);
        assert_eq!(rejected.message, "Please Enter correct Username or Password");

        assert!(Alert::for_login(&LoginOutcome::SignedIn("a@x.com".into())).is_none());
        assert!(Alert::for_login(&LoginOutcome::Invalid(FormErrors::default())).is_none());
    }

    #[test]
    fn test_short_password_login_has_inline_error_only() {
        let errors = LoginForm::new("a@x.com", "wrong").check().unwrap_err();
        let outcome = LoginOutcome::Invalid(errors);

        assert!(Alert::for_login(&outcome).is_none());
    }

    #[test]
    fn test_register_alerts() {
        assert_eq!(
            Alert::for_register(&RegisterOutcome::AlreadyExists),
            Some(Alert::error("User Already Exist", "This username already exist"))
        );
        assert_eq!(
            Alert::for_register(&RegisterOutcome::Registered),
            Some(Alert::success("Registered Successfully", "You have been Registered"))
        );
        assert_eq!(
            Alert::for_register(&RegisterOutcome::Failed),
            Some(Alert::error("Something went Wrong", "Internal Server Error"))
        );
    }

    #[test]
    fn test_board_alerts() {
        let empty = Alert::for_board(BoardOutcome::EmptyNote).unwrap();
        assert_eq!(empty.message, "Please Enter Your Note");
        let empty_update = Alert::for_board(BoardOutcome::EmptyUpdate).unwrap();
        assert_eq!(empty_update.title, "Note is Empty");
        assert_eq!(empty_update.message, "Please Change something to Update");

        let updated = Alert::for_board(BoardOutcome::Updated).unwrap();
        assert_eq!(updated.icon, AlertIcon::Success);

        assert!(Alert::for_board(BoardOutcome::NothingSelected).is_none());
        assert!(Alert::for_board(BoardOutcome::Failed).is_none());
    }
}
