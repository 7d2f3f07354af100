use api::Note;
use dioxus::prelude::*;

use crate::icons::{FaPenToSquare, FaTrash};
use crate::Icon;

/// The notes list, one row per note with edit and delete icons.
///
/// `editing` highlights the row whose text is currently in the input.
#[component]
pub fn NotesTable(
    notes: Vec<Note>,
    editing: Option<i64>,
    on_edit: EventHandler<i64>,
    on_delete: EventHandler<i64>,
) -> Element {
    if notes.is_empty() {
        return rsx! {
            p { class: "py-6 text-center text-neutral-500 text-sm", "No notes yet." }
        };
    }

    rsx! {
        table {
            class: "w-full border-collapse text-sm",
            thead {
                tr {
                    class: "text-left text-neutral-500 border-b border-neutral-200",
                    th { class: "py-2 px-3 w-16", "Id" }
                    th { class: "py-2 px-3", "Note" }
                    th { class: "py-2 px-3 w-24", "" }
                }
            }
            tbody {
                for note in notes {
                    tr {
                        key: "{note.id}",
                        class: if editing == Some(note.id) { "bg-primary-50" } else { "border-b border-neutral-100" },
                        td { class: "py-2 px-3 text-neutral-500", "{note.id}" }
                        td { class: "py-2 px-3 text-neutral-800 whitespace-pre-wrap", "{note.text}" }
                        td {
                            class: "py-2 px-3 flex gap-3",
                            button {
                                class: "text-neutral-600 hover:text-primary-600 cursor-pointer",
                                title: "Edit",
                                onclick: move |_| on_edit.call(note.id),
                                Icon { icon: FaPenToSquare, width: 14, height: 14 }
                            }
                            button {
                                class: "text-neutral-600 hover:text-red-600 cursor-pointer",
                                title: "Delete",
                                onclick: move |_| on_delete.call(note.id),
                                Icon { icon: FaTrash, width: 14, height: 14 }
                            }
                        }
                    }
                }
            }
        }
    }
}
