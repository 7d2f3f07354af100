//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod platform;
pub use platform::{make_session, use_client, ClientProvider};

mod alert;
pub use alert::{use_alert, Alert, AlertIcon, AlertProvider};

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState};

mod navbar;
pub use navbar::Navbar;

mod notes_table;
pub use notes_table::NotesTable;
