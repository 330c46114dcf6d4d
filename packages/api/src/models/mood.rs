//! # Mood vocabulary and intensity scale
//!
//! [`Mood`] is the closed set of moods the record screen offers. The backend
//! receives the lowercase label (`"happy"`) in the `mood_emoji` field; the
//! emoji and the Korean label are presentation only.
//!
//! [`Intensity`] is the 0–10 slider value.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Excited,
    Thrilled,
    Love,
    Confident,
    Calm,
    Numb,
    Tired,
    Gloomy,
    Sad,
    Tearful,
    Annoyed,
    Angry,
    Anxious,
    Scared,
}

impl Mood {
    /// Display order of the emoji grid.
    pub const ALL: [Mood; 15] = [
        Mood::Happy,
        Mood::Excited,
        Mood::Thrilled,
        Mood::Love,
        Mood::Confident,
        Mood::Calm,
        Mood::Numb,
        Mood::Tired,
        Mood::Gloomy,
        Mood::Sad,
        Mood::Tearful,
        Mood::Annoyed,
        Mood::Angry,
        Mood::Anxious,
        Mood::Scared,
    ];

    /// Wire label.
    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Excited => "excited",
            Mood::Thrilled => "thrilled",
            Mood::Love => "love",
            Mood::Confident => "confident",
            Mood::Calm => "calm",
            Mood::Numb => "numb",
            Mood::Tired => "tired",
            Mood::Gloomy => "gloomy",
            Mood::Sad => "sad",
            Mood::Tearful => "tearful",
            Mood::Annoyed => "annoyed",
            Mood::Angry => "angry",
            Mood::Anxious => "anxious",
            Mood::Scared => "scared",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Excited => "😄",
            Mood::Thrilled => "😍",
            Mood::Love => "🥰",
            Mood::Confident => "😎",
            Mood::Calm => "😌",
            Mood::Numb => "😐",
            Mood::Tired => "😴",
            Mood::Gloomy => "😔",
            Mood::Sad => "😢",
            Mood::Tearful => "😭",
            Mood::Annoyed => "😤",
            Mood::Angry => "😡",
            Mood::Anxious => "😰",
            Mood::Scared => "😨",
        }
    }

    /// Korean caption under the emoji.
    pub fn label_ko(self) -> &'static str {
        match self {
            Mood::Happy => "기쁨",
            Mood::Excited => "신남",
            Mood::Thrilled => "설렘",
            Mood::Love => "사랑",
            Mood::Confident => "자신감",
            Mood::Calm => "평온",
            Mood::Numb => "무감각",
            Mood::Tired => "피곤",
            Mood::Gloomy => "우울",
            Mood::Sad => "슬픔",
            Mood::Tearful => "눈물",
            Mood::Annoyed => "짜증",
            Mood::Angry => "분노",
            Mood::Anxious => "불안",
            Mood::Scared => "두려움",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Mood intensity on the 0–10 scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Intensity(u8);

impl Intensity {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 10;

    /// Slider starting position.
    pub const DEFAULT: Intensity = Intensity(5);

    /// Clamp an arbitrary slider reading into range.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Share of the slider track filled, in percent.
    pub fn fill_percent(self) -> u32 {
        u32::from(self.0) * 100 / u32::from(Self::MAX)
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_serde() {
        for mood in Mood::ALL {
            let wire = serde_json::to_string(&mood).unwrap();
            assert_eq!(wire, format!("\"{}\"", mood.label()));
            assert_eq!(serde_json::from_str::<Mood>(&wire).unwrap(), mood);
        }
        assert!(serde_json::from_str::<Mood>(r#""ecstatic""#).is_err());
    }

    #[test]
    fn test_serializes_as_label() {
        assert_eq!(serde_json::to_string(&Mood::Tearful).unwrap(), r#""tearful""#);
        assert_eq!(Mood::Love.emoji(), "🥰");
        assert_eq!(Mood::Scared.label_ko(), "두려움");
    }

    #[test]
    fn test_intensity_bounds() {
        assert_eq!(Intensity::clamped(-3).value(), 0);
        assert_eq!(Intensity::clamped(42).value(), 10);
        assert_eq!(Intensity::default().value(), 5);
    }

    #[test]
    fn test_fill_percent() {
        assert_eq!(Intensity::clamped(0).fill_percent(), 0);
        assert_eq!(Intensity::clamped(7).fill_percent(), 70);
        assert_eq!(Intensity::clamped(10).fill_percent(), 100);
    }
}
