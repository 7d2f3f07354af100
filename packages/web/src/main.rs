use api::ClientConfig;
use dioxus::prelude::*;
use store::Screen;

use ui::{AlertProvider, AuthProvider, ClientProvider};
use views::{Login, Notes, Practice, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/list")]
    Notes {},
    #[route("/practice")]
    Practice {},
    #[route("/Register")]
    Register {},
}

impl From<Screen> for Route {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Login => Route::Login {},
            Screen::Notes => Route::Notes {},
            Screen::Register => Route::Register {},
            Screen::Practice => Route::Practice {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../notes.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> ClientConfig {
    match ClientConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid {}, using defaults: {}", ClientConfig::filename(), e);
            ClientConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ClientProvider {
            config,
            AuthProvider {
                AlertProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = ClientConfig::from_toml(CONFIG_TOML).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_routes_match_paths() {
        assert_eq!(Route::Login {}.to_string(), "/");
        assert_eq!(Route::Notes {}.to_string(), "/list");
        assert_eq!(Route::Practice {}.to_string(), "/practice");
        assert_eq!(Route::Register {}.to_string(), "/Register");
        assert_eq!(Route::from(Screen::Notes), Route::Notes {});
    }
}
