use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::client::{CredentialsApi, NotesApi};
use crate::error::ApiError;
use crate::models::{Credential, NewCredential, Note};

const MEMORY_URL: &str = "memory://";

/// In-memory backend for both resources, for tests and local demos.
///
/// Clones share state. Ids are assigned as `max + 1`, starting at 1. The
/// backend can be taken offline (every call fails) or made to reject writes
/// with a 500, and it counts credential reads and writes, and note writes, so
/// callers can assert on traffic.
#[derive(Clone, Debug, Default)]
pub struct MemoryApi {
    state: Arc<Mutex<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    notes: Vec<Note>,
    credentials: Vec<Credential>,
    offline: bool,
    fail_writes: bool,
    credential_reads: usize,
    credential_writes: usize,
    note_writes: usize,
}

impl MemoryState {
    fn check_online(&self) -> Result<(), ApiError> {
        if self.offline {
            Err(ApiError::Offline)
        } else {
            Ok(())
        }
    }

    fn check_writable(&self, method: &'static str) -> Result<(), ApiError> {
        self.check_online()?;
        if self.fail_writes {
            return Err(ApiError::Status {
                method,
                url: MEMORY_URL.to_string(),
                status: 500,
            });
        }
        Ok(())
    }

    fn next_note_id(&self) -> i64 {
        self.notes.iter().map(|n| n.id).max().unwrap_or(0) + 1
    }

    fn next_credential_id(&self) -> i64 {
        self.credentials.iter().map(|c| c.id).max().unwrap_or(0) + 1
    }
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a note directly, bypassing online/write checks. Returns its id.
    pub fn seed_note(&self, text: &str) -> i64 {
        let mut state = self.state();
        let id = state.next_note_id();
        state.notes.push(Note {
            id,
            text: text.to_string(),
        });
        id
    }

    /// Add a credential record directly, stored exactly as given. Returns its id.
    pub fn seed_credential(&self, username: &str, password: &str) -> i64 {
        let mut state = self.state();
        let id = state.next_credential_id();
        state.credentials.push(Credential {
            id,
            username: username.to_string(),
            password: password.to_string(),
        });
        id
    }

    /// When offline, every call returns [`ApiError::Offline`].
    pub fn set_offline(&self, offline: bool) {
        self.state().offline = offline;
    }

    /// When set, every write returns a 500 status error.
    pub fn fail_writes(&self, fail: bool) {
        self.state().fail_writes = fail;
    }

    pub fn notes(&self) -> Vec<Note> {
        self.state().notes.clone()
    }

    pub fn credentials(&self) -> Vec<Credential> {
        self.state().credentials.clone()
    }

    /// Number of credential `GET`s received, including failed ones.
    pub fn credential_reads(&self) -> usize {
        self.state().credential_reads
    }

    /// Number of credential `POST`s received, including failed ones.
    pub fn credential_writes(&self) -> usize {
        self.state().credential_writes
    }

    /// Number of note `POST`/`PUT`/`DELETE`s received, including failed ones.
    pub fn note_writes(&self) -> usize {
        self.state().note_writes
    }
}

impl NotesApi for MemoryApi {
    async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        let state = self.state();
        state.check_online()?;
        Ok(state.notes.clone())
    }

    async fn insert_note(&self, text: &str) -> Result<(), ApiError> {
        let mut state = self.state();
        state.note_writes += 1;
        state.check_writable("POST")?;
        let id = state.next_note_id();
        state.notes.push(Note {
            id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn update_note(&self, id: i64, text: &str) -> Result<(), ApiError> {
        let mut state = self.state();
        state.note_writes += 1;
        state.check_writable("PUT")?;
        let Some(note) = state.notes.iter_mut().find(|n| n.id == id) else {
            return Err(ApiError::Status {
                method: "PUT",
                url: MEMORY_URL.to_string(),
                status: 404,
            });
        };
        note.text = text.to_string();
        Ok(())
    }

    async fn delete_note(&self, id: i64) -> Result<(), ApiError> {
        let mut state = self.state();
        state.note_writes += 1;
        state.check_writable("DELETE")?;
        state.notes.retain(|n| n.id != id);
        Ok(())
    }
}

impl CredentialsApi for MemoryApi {
    async fn list_credentials(&self) -> Result<Vec<Credential>, ApiError> {
        let mut state = self.state();
        state.credential_reads += 1;
        state.check_online()?;
        Ok(state.credentials.clone())
    }

    async fn create_credential(&self, credential: &NewCredential) -> Result<(), ApiError> {
        let mut state = self.state();
        state.credential_writes += 1;
        state.check_writable("POST")?;
        let id = state.next_credential_id();
        state.credentials.push(Credential {
            id,
            username: credential.username.clone(),
            password: credential.password.clone(),
        });
        Ok(())
    }
}
