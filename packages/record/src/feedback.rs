//! Feedback shown in the result panel once a record is saved.

use api::MoodRecordResponse;
use serde_json::Value;

/// Shown when the record was saved but no usable analysis came back.
pub const FALLBACK_MESSAGE: &str = "기록은 정상적으로 저장되었으나 AI 분석을 불러오지 못했습니다.";

/// Alert text for a failed submission.
pub const SUBMIT_ERROR_MESSAGE: &str = "서버 통신 중 오류가 발생했습니다.";

#[derive(Clone, Debug, PartialEq)]
pub enum Feedback {
    Analysis(String),
    Fallback,
}

impl Feedback {
    pub fn from_response(response: &MoodRecordResponse) -> Self {
        if !response.is_success() {
            return Feedback::Fallback;
        }
        let Some(analysis) = &response.analysis else {
            return Feedback::Fallback;
        };
        let text = &analysis.analysis_text;
        if text.trim().is_empty() {
            return Feedback::Fallback;
        }
        Feedback::Analysis(unwrap_nested(text).unwrap_or_else(|| text.clone()))
    }

    pub fn text(&self) -> &str {
        match self {
            Feedback::Analysis(text) => text,
            Feedback::Fallback => FALLBACK_MESSAGE,
        }
    }

    /// Lines of the feedback, split where line breaks should be rendered.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text().split('\n')
    }
}

/// Some analyses arrive as a JSON object serialized into `analysis_text`.
/// Use its inner `analysis_text` when that is a non-empty string; anything
/// else (parse failure, missing or non-string field) keeps the raw text.
fn unwrap_nested(text: &str) -> Option<String> {
    if !text.trim_start().starts_with('{') {
        return None;
    }
    let inner: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("analysis text looks like JSON but does not parse: {e}");
            return None;
        }
    };
    inner
        .get("analysis_text")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::AnalysisResult;

    fn response(status: &str, text: Option<&str>) -> MoodRecordResponse {
        MoodRecordResponse {
            record_id: 1,
            analysis_status: status.to_string(),
            analysis: text.map(|t| AnalysisResult {
                analysis_text: t.to_string(),
            }),
        }
    }

    #[test]
    fn test_plain_analysis() {
        let fb = Feedback::from_response(&response("success", Some("좋은 하루였네요.\n내일도 힘내요.")));
        assert_eq!(fb.text(), "좋은 하루였네요.\n내일도 힘내요.");
        assert_eq!(fb.lines().collect::<Vec<_>>(), vec!["좋은 하루였네요.", "내일도 힘내요."]);
    }

    #[test]
    fn test_nested_analysis_is_unwrapped() {
        let fb = Feedback::from_response(&response("success", Some(r#"{"analysis_text":"nested"}"#)));
        assert_eq!(fb.text(), "nested");
    }

    #[test]
    fn test_malformed_nested_keeps_raw_text() {
        let raw = r#"{"analysis_text": "cut off"#;
        let fb = Feedback::from_response(&response("success", Some(raw)));
        assert_eq!(fb.text(), raw);

        let raw = r#"{"summary":"no inner field"}"#;
        assert_eq!(Feedback::from_response(&response("success", Some(raw))).text(), raw);

        let raw = r#"{"analysis_text":""}"#;
        assert_eq!(Feedback::from_response(&response("success", Some(raw))).text(), raw);
    }

    #[test]
    fn test_non_success_falls_back() {
        let fb = Feedback::from_response(&response("failed", Some("ignored")));
        assert_eq!(fb, Feedback::Fallback);
        assert_eq!(fb.text(), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_missing_or_empty_analysis_falls_back() {
        assert_eq!(Feedback::from_response(&response("success", None)), Feedback::Fallback);
        assert_eq!(Feedback::from_response(&response("success", Some("  "))), Feedback::Fallback);
    }
}
