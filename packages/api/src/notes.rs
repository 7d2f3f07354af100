//! # Notes board
//!
//! [`NotesBoard`] is the whole state of the notes screen: the fetched list,
//! the text in the input and the id picked for editing. The async operations
//! run against any [`NotesApi`] and report a [`BoardOutcome`] that the view
//! turns into a dialog (or nothing).
//!
//! | Action | Precondition | Remote calls | Local effect |
//! |--------|--------------|--------------|--------------|
//! | [`BoardAction::Refresh`] | none | `GET` | list replaced |
//! | [`BoardAction::Insert`] | draft non-empty | `POST`, `GET` | list replaced, draft cleared |
//! | [`BoardAction::Update`] | draft non-empty, note selected | `PUT`, `GET` | list replaced, draft and selection cleared |
//! | [`BoardAction::Delete`] | none | `DELETE` | id filtered out of the list |
//!
//! Every action runs in three steps so the live board is never held across a
//! network call: [`NotesBoard::prepare`] copies out what the request needs,
//! [`BoardRequest::send`] talks to the server, and [`NotesBoard::commit`]
//! writes only the fields the action owns. Typing or selecting a note while a
//! request is in flight survives it. Mutation failures are logged and leave
//! the board as it was.

use crate::client::NotesApi;
use crate::models::Note;

/// A user-triggered operation on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardAction {
    Refresh,
    Insert,
    Update,
    Delete(i64),
}

/// What the view should tell the user after an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardOutcome {
    /// Finished without anything to announce.
    Done,
    /// The selected note was rewritten.
    Updated,
    /// Insert was attempted with an empty input.
    EmptyNote,
    /// Update was attempted with an empty input.
    EmptyUpdate,
    /// Update was attempted with no note selected. Silent.
    NothingSelected,
    /// A remote call failed. The error has been logged.
    Failed,
}

/// The remote half of an action, detached from the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardRequest {
    Refresh,
    Insert { text: String },
    Update { id: i64, text: String },
    Delete { id: i64 },
}

/// What came back from the server, ready to be committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardEffect {
    Listed(Vec<Note>),
    /// The POST succeeded. `None` if the refetch afterwards failed.
    Inserted(Option<Vec<Note>>),
    /// The PUT succeeded. `None` if the refetch afterwards failed.
    Updated(Option<Vec<Note>>),
    Deleted(i64),
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotesBoard {
    pub notes: Vec<Note>,
    /// Contents of the note input.
    pub draft: String,
    /// Id of the note whose text was copied into the draft for editing.
    pub editing: Option<i64>,
}

impl NotesBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `action` start to finish on this board.
    pub async fn apply<A: NotesApi>(&mut self, api: &A, action: BoardAction) -> BoardOutcome {
        match self.prepare(action) {
            Ok(request) => {
                let effect = request.send(api).await;
                self.commit(effect)
            }
            Err(outcome) => outcome,
        }
    }

    /// Check preconditions and copy out what the request needs.
    ///
    /// `Err` carries the outcome of an action that never reaches the server.
    pub fn prepare(&self, action: BoardAction) -> Result<BoardRequest, BoardOutcome> {
        match action {
            BoardAction::Refresh => Ok(BoardRequest::Refresh),
            BoardAction::Insert if self.draft.is_empty() => Err(BoardOutcome::EmptyNote),
            BoardAction::Insert => Ok(BoardRequest::Insert {
                text: self.draft.clone(),
            }),
            BoardAction::Update if self.draft.is_empty() => Err(BoardOutcome::EmptyUpdate),
            BoardAction::Update => match self.editing {
                Some(id) => Ok(BoardRequest::Update {
                    id,
                    text: self.draft.clone(),
                }),
                None => Err(BoardOutcome::NothingSelected),
            },
            BoardAction::Delete(id) => Ok(BoardRequest::Delete { id }),
        }
    }

    /// Fold a server response into the board, touching only what the action owns.
    pub fn commit(&mut self, effect: BoardEffect) -> BoardOutcome {
        match effect {
            BoardEffect::Listed(notes) => {
                self.notes = notes;
                BoardOutcome::Done
            }
            BoardEffect::Inserted(notes) => {
                self.draft.clear();
                match notes {
                    Some(notes) => {
                        self.notes = notes;
                        BoardOutcome::Done
                    }
                    None => BoardOutcome::Failed,
                }
            }
            BoardEffect::Updated(notes) => {
                if let Some(notes) = notes {
                    self.notes = notes;
                }
                self.draft.clear();
                self.editing = None;
                BoardOutcome::Updated
            }
            BoardEffect::Deleted(id) => {
                self.notes.retain(|n| n.id != id);
                if self.editing == Some(id) {
                    self.editing = None;
                }
                BoardOutcome::Done
            }
            BoardEffect::Failed => BoardOutcome::Failed,
        }
    }

    /// Copy a note's text into the draft and remember its id.
    ///
    /// Unknown ids are ignored.
    pub fn select(&mut self, id: i64) {
        if let Some(note) = self.notes.iter().find(|n| n.id == id) {
            self.draft = note.text.clone();
            self.editing = Some(id);
        }
    }
}

impl BoardRequest {
    pub async fn send<A: NotesApi>(self, api: &A) -> BoardEffect {
        match self {
            Self::Refresh => match list(api).await {
                Some(notes) => BoardEffect::Listed(notes),
                None => BoardEffect::Failed,
            },
            Self::Insert { text } => match api.insert_note(&text).await {
                Ok(()) => BoardEffect::Inserted(list(api).await),
                Err(e) => {
                    tracing::error!("Failed to insert note: {}", e);
                    BoardEffect::Failed
                }
            },
            Self::Update { id, text } => match api.update_note(id, &text).await {
                Ok(()) => BoardEffect::Updated(list(api).await),
                Err(e) => {
                    tracing::error!("Failed to update note {}: {}", id, e);
                    BoardEffect::Failed
                }
            },
            // No refetch: the row is dropped locally.
            Self::Delete { id } => match api.delete_note(id).await {
                Ok(()) => BoardEffect::Deleted(id),
                Err(e) => {
                    tracing::error!("Failed to delete note {}: {}", id, e);
                    BoardEffect::Failed
                }
            },
        }
    }
}

async fn list<A: NotesApi>(api: &A) -> Option<Vec<Note>> {
    match api.list_notes().await {
        Ok(notes) => {
            tracing::debug!("Fetched {} notes", notes.len());
            Some(notes)
        }
        Err(e) => {
            tracing::error!("Failed to fetch notes: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryApi;

    async fn loaded(api: &MemoryApi) -> NotesBoard {
        let mut board = NotesBoard::new();
        assert_eq!(board.apply(api, BoardAction::Refresh).await, BoardOutcome::Done);
        board
    }

    fn texts(board: &NotesBoard) -> Vec<&str> {
        board.notes.iter().map(|n| n.text.as_str()).collect()
    }

    #[tokio::test]
    async fn test_refresh_replaces_list() {
        let api = MemoryApi::new();
        api.seed_note("one");
        let mut board = loaded(&api).await;
        api.seed_note("two");

        board.apply(&api, BoardAction::Refresh).await;

        assert_eq!(texts(&board), vec!["one", "two"]);
    }

    #[tokio::test]
    async fn test_edits_during_refresh_survive() {
        let api = MemoryApi::new();
        api.seed_note("one");
        let two = api.seed_note("two");
        let mut board = loaded(&api).await;

        let request = board.prepare(BoardAction::Refresh).unwrap();
        board.select(two);
        board.draft.push_str(" edited");
        api.seed_note("three");
        let effect = request.send(&api).await;
        board.commit(effect);

        assert_eq!(texts(&board), vec!["one", "two", "three"]);
        assert_eq!(board.editing, Some(two));
        assert_eq!(board.draft, "two edited");
    }

    #[tokio::test]
    async fn test_delete_in_flight_keeps_other_selection() {
        let api = MemoryApi::new();
        let one = api.seed_note("one");
        let two = api.seed_note("two");
        let mut board = loaded(&api).await;

        let request = board.prepare(BoardAction::Delete(one)).unwrap();
        board.select(two);
        let effect = request.send(&api).await;
        board.commit(effect);

        assert_eq!(board.editing, Some(two));
        assert_eq!(board.draft, "two");
        assert_eq!(texts(&board), vec!["two"]);
    }

    #[tokio::test]
    async fn test_insert_adds_exactly_one_row() {
        let api = MemoryApi::new();
        api.seed_note("one");
        let mut board = loaded(&api).await;
        board.draft = "two".into();

        let outcome = board.apply(&api, BoardAction::Insert).await;

        assert_eq!(outcome, BoardOutcome::Done);
        assert_eq!(board.notes.len(), 2);
        assert_eq!(texts(&board), vec!["one", "two"]);
        assert!(board.draft.is_empty());
    }

    #[tokio::test]
    async fn test_insert_sends_text_captured_at_submit() {
        let api = MemoryApi::new();
        let mut board = loaded(&api).await;
        board.draft = "submitted".into();

        let request = board.prepare(BoardAction::Insert).unwrap();
        board.draft = "typed later".into();
        let effect = request.send(&api).await;
        board.commit(effect);

        assert_eq!(texts(&board), vec!["submitted"]);
    }

    #[tokio::test]
    async fn test_insert_empty_draft_is_refused() {
        let api = MemoryApi::new();
        let mut board = loaded(&api).await;

        let outcome = board.apply(&api, BoardAction::Insert).await;

        assert_eq!(outcome, BoardOutcome::EmptyNote);
        assert_eq!(api.note_writes(), 0);
    }

    #[tokio::test]
    async fn test_insert_failure_keeps_draft() {
        let api = MemoryApi::new();
        let mut board = loaded(&api).await;
        board.draft = "keep me".into();
        api.fail_writes(true);

        assert_eq!(board.apply(&api, BoardAction::Insert).await, BoardOutcome::Failed);
        assert_eq!(board.draft, "keep me");
        assert!(board.notes.is_empty());
    }

    #[tokio::test]
    async fn test_select_copies_text() {
        let api = MemoryApi::new();
        api.seed_note("one");
        let id = api.seed_note("two");
        let mut board = loaded(&api).await;

        board.select(id);
        assert_eq!(board.draft, "two");
        assert_eq!(board.editing, Some(id));

        board.select(999);
        assert_eq!(board.editing, Some(id));
    }

    #[tokio::test]
    async fn test_update_rewrites_only_selected_note() {
        let api = MemoryApi::new();
        api.seed_note("one");
        let id = api.seed_note("two");
        api.seed_note("three");
        let mut board = loaded(&api).await;
        board.select(id);
        board.draft = "TWO".into();

        let outcome = board.apply(&api, BoardAction::Update).await;

        assert_eq!(outcome, BoardOutcome::Updated);
        assert_eq!(texts(&board), vec!["one", "TWO", "three"]);
        assert!(board.draft.is_empty());
        assert_eq!(board.editing, None);
    }

    #[tokio::test]
    async fn test_update_empty_checked_before_selection() {
        let api = MemoryApi::new();
        let mut board = loaded(&api).await;

        assert_eq!(board.apply(&api, BoardAction::Update).await, BoardOutcome::EmptyUpdate);
        assert_eq!(api.note_writes(), 0);
    }

    #[tokio::test]
    async fn test_update_without_selection_sends_nothing() {
        let api = MemoryApi::new();
        api.seed_note("one");
        let mut board = loaded(&api).await;
        let before = api.notes();
        board.draft = "text".into();

        let outcome = board.apply(&api, BoardAction::Update).await;

        assert_eq!(outcome, BoardOutcome::NothingSelected);
        assert_eq!(api.note_writes(), 0);
        assert_eq!(api.notes(), before);
        assert_eq!(board.draft, "text");
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_that_id() {
        let api = MemoryApi::new();
        let a = api.seed_note("a");
        let b = api.seed_note("b");
        let c = api.seed_note("c");
        let mut board = loaded(&api).await;
        board.select(b);

        let outcome = board.apply(&api, BoardAction::Delete(b)).await;

        assert_eq!(outcome, BoardOutcome::Done);
        let ids: Vec<i64> = board.notes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![a, c]);
        assert_eq!(board.editing, None);
        assert_eq!(api.notes().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_does_not_refetch() {
        let api = MemoryApi::new();
        let a = api.seed_note("a");
        let mut board = loaded(&api).await;
        api.seed_note("added elsewhere");

        board.apply(&api, BoardAction::Delete(a)).await;

        assert!(board.notes.is_empty());
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_row() {
        let api = MemoryApi::new();
        let a = api.seed_note("a");
        let mut board = loaded(&api).await;
        api.set_offline(true);

        assert_eq!(board.apply(&api, BoardAction::Delete(a)).await, BoardOutcome::Failed);
        assert_eq!(board.notes.len(), 1);
    }
}
