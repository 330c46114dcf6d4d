//! The mood record screen.
//!
//! All state lives in one [`Wizard`] signal; handlers mutate it, forward the
//! returned events to analytics and scroll newly opened sections into view.

use api::{Intensity, Mood};
use dioxus::prelude::*;
use record::{ResultPanel, Section, Wizard, SUBMIT_ERROR_MESSAGE};

use crate::browser::{self, ScrollBlock};
use crate::services::use_services;

const RECORD_CSS: Asset = asset!("/assets/styling/record.css");

const TRACK_FILL: &str = "#C4A8D8";
const TRACK_EMPTY: &str = "#EDE6DD";

/// Slider track painted up to the current value.
pub fn slider_background(intensity: Intensity) -> String {
    let pct = intensity.fill_percent();
    format!(
        "linear-gradient(to right, {TRACK_FILL} 0%, {TRACK_FILL} {pct}%, {TRACK_EMPTY} {pct}%, {TRACK_EMPTY} 100%)"
    )
}

fn section_class(active: bool) -> &'static str {
    if active {
        "record-section active-section"
    } else {
        "record-section disabled-section"
    }
}

#[component]
pub fn RecordWizard() -> Element {
    let services = use_services();
    let mut wizard = use_signal(Wizard::new);
    let delay = services.config.ui.scroll_delay_ms;

    let track = services.clone();
    let select_mood = use_callback(move |mood: Mood| {
        let step = wizard.write().select_mood(mood);
        track.track(step.event);
        if let Some(section) = step.revealed {
            browser::reveal(section.element_id(), ScrollBlock::Center, delay);
        }
    });

    let track = services.clone();
    let confirm_intensity = use_callback(move |_: ()| {
        let result = wizard.write().confirm_intensity();
        match result {
            Ok(step) => {
                track.track(step.event);
                if let Some(section) = step.revealed {
                    browser::reveal(section.element_id(), ScrollBlock::Center, delay);
                }
            }
            Err(e) => tracing::warn!("ignoring intensity confirm: {e}"),
        }
    });

    let track = services.clone();
    let focus_note = use_callback(move |_: ()| {
        let started = wizard.write().focus_note();
        if let Some(event) = started {
            track.track(event);
        }
    });

    let submitter = services.clone();
    let submit = use_callback(move |_: ()| {
        let services = submitter.clone();
        let begun = wizard.write().begin_submit(services.identity.anon_id());
        let request = match begun {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!("submit ignored: {e}");
                return;
            }
        };
        browser::reveal(Section::Result.element_id(), ScrollBlock::End, delay);

        spawn(async move {
            match services.recorder.submit(&request).await {
                Ok(response) => {
                    let events = wizard.write().complete_submit(&response);
                    for event in events {
                        services.track(event);
                    }
                }
                Err(_) => {
                    browser::alert(SUBMIT_ERROR_MESSAGE);
                    wizard.write().fail_submit();
                }
            }
        });
    });

    let confirmer = services.clone();
    let confirm_feedback = use_callback(move |_: ()| {
        let services = confirmer.clone();
        spawn(async move {
            services.recorder.confirm().await;
            browser::navigate_to(&services.config.routes.home);
        });
    });

    let state = wizard.read().clone();
    let selected = state.draft().mood;
    let slider = state.slider();
    let slider_bg = slider_background(slider);
    let note = state.draft().note.clone();

    rsx! {
        document::Stylesheet { href: RECORD_CSS }

        div {
            class: "record-wizard",

            section {
                id: Section::Emoji.element_id(),
                class: section_class(true),
                h2 { "지금 기분이 어때요?" }
                div {
                    class: "emoji-grid",
                    for mood in Mood::ALL {
                        button {
                            key: "{mood.label()}",
                            class: if selected == Some(mood) { "emoji-btn selected" } else { "emoji-btn" },
                            "data-label": mood.label(),
                            onclick: move |_| select_mood.call(mood),
                            span { class: "emoji", "{mood.emoji()}" }
                            span { class: "emoji-label", "{mood.label_ko()}" }
                        }
                    }
                }
            }

            section {
                id: Section::Intensity.element_id(),
                class: section_class(state.is_active(Section::Intensity)),
                h2 { "얼마나 강하게 느껴지나요?" }
                div {
                    id: "slider-value-display",
                    class: "slider-value",
                    "{slider}"
                }
                input {
                    id: "intensity-slider",
                    r#type: "range",
                    min: "0",
                    max: "10",
                    value: "{slider}",
                    style: "background: {slider_bg}",
                    disabled: !state.is_active(Section::Intensity),
                    oninput: move |evt| {
                        if let Ok(value) = evt.value().parse::<i64>() {
                            wizard.write().slide(value);
                        }
                    },
                }
                button {
                    id: "intensity-confirm-btn",
                    disabled: !state.is_active(Section::Intensity),
                    onclick: move |_| confirm_intensity.call(()),
                    "다음"
                }
            }

            section {
                id: Section::Note.element_id(),
                class: section_class(state.is_active(Section::Note)),
                h2 { "어떤 일이 있었나요?" }
                textarea {
                    id: "note-input",
                    placeholder: "자유롭게 적어주세요 (선택)",
                    maxlength: "500",
                    value: "{note}",
                    disabled: !state.is_active(Section::Note),
                    onfocus: move |_| focus_note.call(()),
                    oninput: move |evt| wizard.write().set_note(evt.value()),
                }
                button {
                    id: "submit-btn",
                    disabled: !state.can_submit(),
                    onclick: move |_| submit.call(()),
                    if state.is_submitting() { "기록 중..." } else { "기록하기" }
                }
            }

            ResultSection {
                panel: state.result().clone(),
                on_confirm: move |_| confirm_feedback.call(()),
            }
        }
    }
}

#[component]
fn ResultSection(panel: ResultPanel, on_confirm: EventHandler<()>) -> Element {
    let class = match &panel {
        ResultPanel::Hidden => "result-section",
        _ => "result-section visible",
    };

    let body = match panel {
        ResultPanel::Hidden => rsx! {},
        ResultPanel::Loading => rsx! {
            div {
                id: "loading-spinner",
                class: "loading-spinner",
                div { class: "spinner" }
                p { "마음을 읽고 있어요..." }
            }
        },
        ResultPanel::Ready(feedback) => {
            let lines: Vec<String> = feedback.lines().map(str::to_string).collect();
            rsx! {
                div {
                    id: "result-content",
                    p {
                        id: "feedback-text",
                        for (i, line) in lines.into_iter().enumerate() {
                            if i > 0 {
                                br {}
                            }
                            "{line}"
                        }
                    }
                    button {
                        id: "confirm-btn",
                        onclick: move |_| on_confirm.call(()),
                        "확인"
                    }
                }
            }
        }
    };

    rsx! {
        section {
            id: Section::Result.element_id(),
            class: "{class}",
            {body}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_background_tracks_value() {
        assert_eq!(
            slider_background(Intensity::clamped(7)),
            "linear-gradient(to right, #C4A8D8 0%, #C4A8D8 70%, #EDE6DD 70%, #EDE6DD 100%)"
        );
        assert!(slider_background(Intensity::clamped(0)).contains("#C4A8D8 0%, #EDE6DD 0%"));
    }

    #[test]
    fn test_section_class() {
        assert_eq!(section_class(true), "record-section active-section");
        assert_eq!(section_class(false), "record-section disabled-section");
    }
}
