//! Landing page. The OAuth redirect also lands here with `?token=`.

use dioxus::prelude::*;
use ui::Navbar;

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        Navbar {}
        div {
            class: "home-hero",
            h1 { "오늘 하루, 어떤 기분이었나요?" }
            p { "감정을 기록하면 AI가 따뜻한 피드백을 건네드려요." }
            Link {
                class: "btn-record",
                to: Route::Record {},
                "기록하러 가기"
            }
        }
    }
}
