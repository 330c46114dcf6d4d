//! # Record wizard state machine
//!
//! The record screen is a linear form with progressive disclosure:
//!
//! ```text
//! Emoji ──select──▶ Intensity ──confirm──▶ Note ──submit──▶ Result
//! ```
//!
//! [`Wizard`] owns the [`RecordDraft`] and the visibility of every section.
//! It performs no I/O. Each input method returns what the caller has to do
//! next (an [`Event`] to log, a [`Section`] to scroll to); submission is split
//! into [`Wizard::begin_submit`] and [`Wizard::complete_submit`] /
//! [`Wizard::fail_submit`] so the network call can happen in between without
//! holding a borrow.
//!
//! Sections only ever open. Re-opening an open section is a no-op, which is
//! why picking a different mood after the intensity step does not scroll back.

use api::{Event, Intensity, Mood, MoodRecordRequest, MoodRecordResponse};
use thiserror::Error;

use crate::feedback::Feedback;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Emoji,
    Intensity,
    Note,
    Result,
}

impl Section {
    /// DOM id of the section container.
    pub fn element_id(self) -> &'static str {
        match self {
            Section::Emoji => "section-emoji",
            Section::Intensity => "section-intensity",
            Section::Note => "section-note",
            Section::Result => "section-result",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ResultPanel {
    Hidden,
    Loading,
    Ready(Feedback),
}

/// What the user has entered so far.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordDraft {
    pub mood: Option<Mood>,
    pub intensity: Option<Intensity>,
    pub note: String,
}

/// Outcome of an input step.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub event: Event,
    /// Section opened by this step, to be scrolled into view.
    pub revealed: Option<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("{0:?} section is not active yet")]
    Inactive(Section),
    #[error("mood and intensity must be chosen before submitting")]
    Incomplete,
    #[error("a submission is already in flight")]
    InFlight,
    #[error("this record was already saved")]
    Submitted,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Wizard {
    draft: RecordDraft,
    slider: Intensity,
    intensity_open: bool,
    note_open: bool,
    note_started: bool,
    submitting: bool,
    result: ResultPanel,
}

impl Default for Wizard {
    fn default() -> Self {
        Self {
            draft: RecordDraft::default(),
            slider: Intensity::DEFAULT,
            intensity_open: false,
            note_open: false,
            note_started: false,
            submitting: false,
            result: ResultPanel::Hidden,
        }
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &RecordDraft {
        &self.draft
    }

    /// Current slider position, confirmed or not.
    pub fn slider(&self) -> Intensity {
        self.slider
    }

    pub fn result(&self) -> &ResultPanel {
        &self.result
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_active(&self, section: Section) -> bool {
        match section {
            Section::Emoji => true,
            Section::Intensity => self.intensity_open,
            Section::Note => self.note_open,
            Section::Result => self.result != ResultPanel::Hidden,
        }
    }

    /// Open `section`. Returns `true` only if it was closed before.
    fn activate(&mut self, section: Section) -> bool {
        let flag = match section {
            Section::Intensity => &mut self.intensity_open,
            Section::Note => &mut self.note_open,
            Section::Emoji | Section::Result => return false,
        };
        if *flag {
            return false;
        }
        *flag = true;
        true
    }

    pub fn select_mood(&mut self, mood: Mood) -> Step {
        self.draft.mood = Some(mood);
        let revealed = self
            .activate(Section::Intensity)
            .then_some(Section::Intensity);
        Step {
            event: Event::EmojiSelected { label: mood },
            revealed,
        }
    }

    /// Move the slider. Out-of-range readings are clamped.
    pub fn slide(&mut self, value: i64) -> Intensity {
        self.slider = Intensity::clamped(value);
        self.slider
    }

    /// Commit the slider value and open the note section.
    pub fn confirm_intensity(&mut self) -> Result<Step, WizardError> {
        if !self.intensity_open {
            return Err(WizardError::Inactive(Section::Intensity));
        }
        let intensity = self.slider;
        self.draft.intensity = Some(intensity);
        let revealed = self.activate(Section::Note).then_some(Section::Note);
        Ok(Step {
            event: Event::IntensitySelected { intensity },
            revealed,
        })
    }

    pub fn set_note(&mut self, text: impl Into<String>) {
        self.draft.note = text.into();
    }

    /// The note field gained focus. Yields the start event on the first focus only.
    pub fn focus_note(&mut self) -> Option<Event> {
        if self.note_started {
            return None;
        }
        self.note_started = true;
        Some(Event::TextInputStart)
    }

    pub fn can_submit(&self) -> bool {
        self.note_open
            && !self.submitting
            && !matches!(self.result, ResultPanel::Ready(_))
            && self.draft.mood.is_some()
            && self.draft.intensity.is_some()
    }

    /// Lock the form, show the loading panel and build the request body.
    pub fn begin_submit(&mut self, anon_id: String) -> Result<MoodRecordRequest, WizardError> {
        if self.submitting {
            return Err(WizardError::InFlight);
        }
        if matches!(self.result, ResultPanel::Ready(_)) {
            return Err(WizardError::Submitted);
        }
        let (Some(mood), Some(intensity)) = (self.draft.mood, self.draft.intensity) else {
            return Err(WizardError::Incomplete);
        };

        self.submitting = true;
        self.result = ResultPanel::Loading;

        Ok(MoodRecordRequest {
            mood_emoji: mood,
            intensity,
            mood_text: self.draft.note.trim().to_string(),
            anon_id,
        })
    }

    /// Roll back to the pre-submit state.
    pub fn fail_submit(&mut self) {
        self.submitting = false;
        self.result = ResultPanel::Hidden;
    }

    /// Show the feedback and return the events to log, in order.
    pub fn complete_submit(&mut self, response: &MoodRecordResponse) -> Vec<Event> {
        self.submitting = false;
        self.result = ResultPanel::Ready(Feedback::from_response(response));
        vec![
            Event::RecordComplete {
                record_id: response.record_id,
            },
            Event::AnalysisView {
                record_id: response.record_id,
                status: response.analysis_status.clone(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::FALLBACK_MESSAGE;
    use api::AnalysisResult;

    fn filled(mood: Mood, intensity: i64, note: &str) -> Wizard {
        let mut wizard = Wizard::new();
        wizard.select_mood(mood);
        wizard.slide(intensity);
        wizard.confirm_intensity().unwrap();
        wizard.set_note(note);
        wizard
    }

    #[test]
    fn test_initial_state() {
        let wizard = Wizard::new();
        assert!(wizard.is_active(Section::Emoji));
        assert!(!wizard.is_active(Section::Intensity));
        assert!(!wizard.is_active(Section::Note));
        assert!(!wizard.is_active(Section::Result));
        assert_eq!(wizard.slider().value(), 5);
        assert!(!wizard.can_submit());
    }

    #[test]
    fn test_emoji_opens_intensity_only() {
        let mut wizard = Wizard::new();
        let step = wizard.select_mood(Mood::Happy);

        assert_eq!(step.event, Event::EmojiSelected { label: Mood::Happy });
        assert_eq!(step.revealed, Some(Section::Intensity));
        assert!(wizard.is_active(Section::Intensity));
        assert!(!wizard.is_active(Section::Note));
    }

    #[test]
    fn test_reselecting_mood_is_idempotent() {
        let mut wizard = Wizard::new();
        wizard.select_mood(Mood::Happy);
        let step = wizard.select_mood(Mood::Sad);

        assert_eq!(step.revealed, None);
        assert_eq!(step.event, Event::EmojiSelected { label: Mood::Sad });
        assert_eq!(wizard.draft().mood, Some(Mood::Sad));
    }

    #[test]
    fn test_intensity_requires_mood() {
        let mut wizard = Wizard::new();
        assert_eq!(
            wizard.confirm_intensity(),
            Err(WizardError::Inactive(Section::Intensity))
        );
    }

    #[test]
    fn test_confirm_intensity_opens_note() {
        let mut wizard = Wizard::new();
        wizard.select_mood(Mood::Calm);
        assert_eq!(wizard.slide(12).value(), 10);
        wizard.slide(8);

        let step = wizard.confirm_intensity().unwrap();
        assert_eq!(
            step.event,
            Event::IntensitySelected {
                intensity: Intensity::clamped(8)
            }
        );
        assert_eq!(step.revealed, Some(Section::Note));
        assert_eq!(wizard.draft().intensity, Some(Intensity::clamped(8)));

        // Confirming again does not re-reveal
        assert_eq!(wizard.confirm_intensity().unwrap().revealed, None);
    }

    #[test]
    fn test_note_focus_logged_once() {
        let mut wizard = filled(Mood::Tired, 3, "");
        assert_eq!(wizard.focus_note(), Some(Event::TextInputStart));
        assert_eq!(wizard.focus_note(), None);
    }

    #[test]
    fn test_request_body() {
        let mut wizard = filled(Mood::Happy, 7, "great day");
        let request = wizard.begin_submit("anon-xyz".to_string()).unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "mood_emoji": "happy",
                "intensity": 7,
                "mood_text": "great day",
                "anon_id": "anon-xyz",
            })
        );
    }

    #[test]
    fn test_note_is_trimmed() {
        let mut wizard = filled(Mood::Gloomy, 2, "  비가 와서 \n");
        let request = wizard.begin_submit("a".to_string()).unwrap();
        assert_eq!(request.mood_text, "비가 와서");
    }

    #[test]
    fn test_submit_locks_form() {
        let mut wizard = filled(Mood::Happy, 7, "");
        assert!(wizard.can_submit());

        wizard.begin_submit("a".to_string()).unwrap();
        assert!(wizard.is_submitting());
        assert!(!wizard.can_submit());
        assert_eq!(wizard.result(), &ResultPanel::Loading);
        assert!(wizard.is_active(Section::Result));
        assert_eq!(
            wizard.begin_submit("a".to_string()),
            Err(WizardError::InFlight)
        );
    }

    #[test]
    fn test_incomplete_draft_rejected() {
        let mut wizard = Wizard::new();
        wizard.select_mood(Mood::Angry);
        assert_eq!(
            wizard.begin_submit("a".to_string()),
            Err(WizardError::Incomplete)
        );
        assert_eq!(wizard.result(), &ResultPanel::Hidden);
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn test_failure_rolls_back() {
        let mut wizard = filled(Mood::Anxious, 9, "시험");
        wizard.begin_submit("a".to_string()).unwrap();
        wizard.fail_submit();

        assert_eq!(wizard.result(), &ResultPanel::Hidden);
        assert!(!wizard.is_active(Section::Result));
        assert!(wizard.can_submit());
        // Draft survives for the retry
        assert_eq!(wizard.draft().note, "시험");
    }

    #[test]
    fn test_completion_events_and_feedback() {
        let mut wizard = filled(Mood::Love, 10, "");
        wizard.begin_submit("a".to_string()).unwrap();

        let events = wizard.complete_submit(&MoodRecordResponse {
            record_id: 77,
            analysis_status: "error".to_string(),
            analysis: None,
        });

        assert_eq!(
            events,
            vec![
                Event::RecordComplete { record_id: 77 },
                Event::AnalysisView {
                    record_id: 77,
                    status: "error".to_string()
                },
            ]
        );
        match wizard.result() {
            ResultPanel::Ready(fb) => assert_eq!(fb.text(), FALLBACK_MESSAGE),
            other => panic!("unexpected panel {other:?}"),
        }
        assert!(!wizard.can_submit());
        assert_eq!(
            wizard.begin_submit("a".to_string()),
            Err(WizardError::Submitted)
        );
    }

    #[test]
    fn test_completion_with_analysis() {
        let mut wizard = filled(Mood::Confident, 6, "");
        wizard.begin_submit("a".to_string()).unwrap();
        wizard.complete_submit(&MoodRecordResponse {
            record_id: 1,
            analysis_status: "success".to_string(),
            analysis: Some(AnalysisResult {
                analysis_text: "멋진 하루!".to_string(),
            }),
        });
        assert_eq!(
            wizard.result(),
            &ResultPanel::Ready(Feedback::Analysis("멋진 하루!".to_string()))
        );
    }
}
