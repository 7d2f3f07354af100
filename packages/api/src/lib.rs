//! # API crate: remote resources and the flows built on them
//!
//! Everything the screens do that is not rendering lives here, so it can be
//! exercised without a browser. Views call the flows and the board, then map
//! the returned outcome to a dialog.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Form schemas (`validator`), Argon2 password helpers, the login and registration flows |
//! | [`client`] | `NotesApi` / `CredentialsApi` traits and the `reqwest` implementation |
//! | [`config`] | `ClientConfig`, the endpoint and HTTP settings parsed from `notes.toml` |
//! | [`error`] | `ApiError`, shared by every backend |
//! | [`memory`] | `MemoryApi`, an in-process backend for tests and demos |
//! | [`models`] | Wire shapes of notes and credential records |
//! | [`notes`] | `NotesBoard`, the state and operations of the notes screen |

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod memory;
pub mod models;
pub mod notes;

pub use client::{CredentialsApi, HttpClient, NotesApi};
pub use config::{ClientConfig, ConfigError, Endpoints, HttpConfig};
pub use error::ApiError;
pub use memory::MemoryApi;
pub use models::{Credential, NewCredential, Note};
pub use notes::{BoardAction, BoardEffect, BoardOutcome, BoardRequest, NotesBoard};
