use api::{BoardAction, NotesBoard};
use dioxus::prelude::*;
use store::Screen;
use ui::components::{Button, ButtonVariant, Input};
use ui::{make_session, use_alert, use_client, Alert, Navbar, NotesTable};

use crate::Route;

#[component]
pub fn Notes() -> Element {
    let nav = use_navigator();
    let client = use_client();
    let mut alert = use_alert();
    let mut board = use_signal(NotesBoard::new);

    // The board is only borrowed before and after the request, never across it.
    // `peek` keeps the mount effect below from subscribing to the board.
    let dispatch = use_callback(move |action: BoardAction| {
        let request = match board.peek().prepare(action) {
            Ok(request) => request,
            Err(outcome) => {
                if let Some(a) = Alert::for_board(outcome) {
                    alert.set(Some(a));
                }
                return;
            }
        };
        let client = client.clone();
        spawn(async move {
            let effect = request.send(&client).await;
            let outcome = board.write().commit(effect);
            if let Some(a) = Alert::for_board(outcome) {
                alert.set(Some(a));
            }
        });
    });

    use_effect(move || match make_session().redirect_for(Screen::Notes) {
        Some(target) => {
            nav.replace(Route::from(target));
        }
        None => dispatch.call(BoardAction::Refresh),
    });

    let notes = board.read().notes.clone();
    let editing = board.read().editing;
    let draft = board.read().draft.clone();

    rsx! {
        Navbar {}

        main {
            class: "max-w-3xl mx-auto p-6",

            div {
                class: "flex gap-2 mb-6",
                Input {
                    class: "flex-1",
                    r#type: "text",
                    placeholder: "Write a note",
                    value: draft,
                    oninput: move |evt: FormEvent| board.write().draft = evt.value(),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| dispatch.call(BoardAction::Insert),
                    "Insert"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| dispatch.call(BoardAction::Update),
                    "Update"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| dispatch.call(BoardAction::Refresh),
                    "View Note"
                }
            }

            NotesTable {
                notes,
                editing,
                on_edit: move |id: i64| board.write().select(id),
                on_delete: move |id: i64| dispatch.call(BoardAction::Delete(id)),
            }
        }
    }
}
