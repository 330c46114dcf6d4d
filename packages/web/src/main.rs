use dioxus::prelude::*;

use store::MoodPingConfig;
use ui::Services;
use views::{Home, Record};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/record")]
    Record {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../moodping.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> MoodPingConfig {
    match MoodPingConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("invalid {}, using defaults: {e}", MoodPingConfig::filename());
            MoodPingConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let services = use_context_provider(|| Services::new(load_config()));

    // Must run before any view reads the token
    use_hook(|| ui::consume_token_from_url(&services.identity));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
