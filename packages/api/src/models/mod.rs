//! Wire models for the two remote resources.

mod credential;
mod note;

pub use credential::{Credential, NewCredential};
pub use note::{NewNote, Note, NoteRef, NoteUpdate};

use serde::{Deserialize, Deserializer};

/// Accept ids as JSON numbers or numeric strings (`1` or `"1"`).
fn flexible_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WireId {
        Number(i64),
        Text(String),
    }

    match WireId::deserialize(deserializer)? {
        WireId::Number(id) => Ok(id),
        WireId::Text(raw) => raw
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid id `{raw}`"))),
    }
}
