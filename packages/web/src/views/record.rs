//! Mood record page.

use api::Event;
use dioxus::prelude::*;
use ui::{use_services, Navbar, RecordWizard};

#[component]
pub fn Record() -> Element {
    let services = use_services();

    // One page view per mount
    use_hook(move || services.track(Event::RecordScreenView));

    rsx! {
        Navbar {}
        RecordWizard {}
    }
}
