use dioxus::prelude::*;

use crate::auth::NavAuth;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Top bar: brand link on the left, login state on the right.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        nav {
            class: "navbar",
            a { class: "navbar-brand", href: "/", "MoodPing" }
            div {
                id: "nav-actions",
                class: "nav-actions",
                NavAuth {}
            }
        }
    }
}
