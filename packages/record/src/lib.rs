//! Mood record flow: the wizard state machine, feedback extraction and the
//! submission service.

pub mod feedback;
pub mod recorder;
pub mod wizard;

pub use feedback::{Feedback, FALLBACK_MESSAGE, SUBMIT_ERROR_MESSAGE};
pub use recorder::Recorder;
pub use wizard::{RecordDraft, ResultPanel, Section, Step, Wizard, WizardError};
