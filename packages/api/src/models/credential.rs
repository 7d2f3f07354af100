//! # Credential records
//!
//! The credentials resource hands back every account in one array. There is no
//! lookup endpoint, so the client scans that array itself:
//!
//! - [`Credential::find_match`] for login: the record whose username matches and
//!   whose stored password accepts the candidate.
//! - [`Credential::username_taken`] for registration: whether any record already
//!   uses the username.
//!
//! Stored passwords are either Argon2 PHC strings (written by this client) or
//! plaintext (written by older clients); see [`crate::auth::verify_password`].

use serde::{Deserialize, Serialize};

use crate::auth::verify_password;

/// A user record as returned by `GET` on the credentials resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    #[serde(deserialize_with = "super::flexible_id")]
    pub id: i64,
    pub username: String,
    pub password: String,
}

/// `POST` body for a new account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewCredential {
    pub username: String,
    /// PHC-format password hash
    pub password: String,
}

impl Credential {
    /// Whether this record is `username` and its stored password accepts `password`.
    pub fn accepts(&self, username: &str, password: &str) -> bool {
        self.username == username && verify_password(password, &self.password)
    }

    /// Find the record matching both `username` and `password`.
    pub fn find_match<'a>(
        records: &'a [Credential],
        username: &str,
        password: &str,
    ) -> Option<&'a Credential> {
        records.iter().find(|record| record.accepts(username, password))
    }

    /// Whether any record already uses `username`.
    pub fn username_taken(records: &[Credential], username: &str) -> bool {
        records.iter().any(|record| record.username == username)
    }
}
