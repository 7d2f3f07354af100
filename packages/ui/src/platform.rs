//! Platform wiring: which storage backs the session flag, and the shared HTTP
//! client.
//!
//! [`make_session`] picks the [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStore`]
//! - **Native**: `<data_dir>/noteapp/session.toml` via [`store::FileStore`]
//! - **WASM without `web`**: an in-memory map, lost on reload

use api::{ClientConfig, HttpClient};
use dioxus::prelude::*;
use store::Session;

/// Open the session flag on the platform's persistent storage.
///
/// Cheap to call; every screen builds its own on entry.
pub fn make_session() -> Session<impl store::KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Session::new(store::LocalStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("noteapp")
            .join(store::FileStore::FILENAME);
        Session::new(store::FileStore::new(path))
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Session::new(store::MemoryStore::new())
    }
}

/// Build the [`HttpClient`] once and provide it to every descendant.
///
/// If the client cannot be built the app cannot talk to anything, so the
/// children are replaced by an error message.
#[component]
pub fn ClientProvider(config: ClientConfig, children: Element) -> Element {
    let ready = use_hook(|| match HttpClient::new(&config) {
        Ok(client) => {
            tracing::debug!(
                "API endpoints: notes={} credentials={}",
                client.endpoints().notes,
                client.endpoints().credentials
            );
            provide_context(client);
            true
        }
        Err(e) => {
            tracing::error!("{}", e);
            false
        }
    });

    if !ready {
        return rsx! {
            p { class: "p-8 text-red-600", "Unable to start the HTTP client. See the console for details." }
        };
    }

    rsx! {
        {children}
    }
}

/// The client provided by [`ClientProvider`].
pub fn use_client() -> HttpClient {
    use_context::<HttpClient>()
}
