use serde::{Deserialize, Serialize};

/// A note as returned by `GET` on the notes resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Server-assigned id
    #[serde(deserialize_with = "super::flexible_id")]
    pub id: i64,
    /// Body text, `note` on the wire
    #[serde(rename = "note")]
    pub text: String,
}

/// `POST` body: `{"note": ...}`
#[derive(Debug, Serialize)]
pub struct NewNote<'a> {
    pub note: &'a str,
}

/// `PUT` body: `{"id": ..., "note": ...}`
#[derive(Debug, Serialize)]
pub struct NoteUpdate<'a> {
    pub id: i64,
    pub note: &'a str,
}

/// `DELETE` body: `{"id": ...}`
#[derive(Debug, Serialize)]
pub struct NoteRef {
    pub id: i64,
}
