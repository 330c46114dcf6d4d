//! Bodies of the mood record and anonymous-link endpoints.

use serde::{Deserialize, Serialize};

use super::mood::{Intensity, Mood};

/// `analysis_status` value for a completed analysis.
pub const ANALYSIS_SUCCESS: &str = "success";

/// Body of `POST /mood-records`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodRecordRequest {
    pub mood_emoji: Mood,
    pub intensity: Intensity,
    pub mood_text: String,
    pub anon_id: String,
}

/// Response of `POST /mood-records`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodRecordResponse {
    pub record_id: i64,
    pub analysis_status: String,
    #[serde(default)]
    pub analysis: Option<AnalysisResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub analysis_text: String,
}

impl MoodRecordResponse {
    pub fn is_success(&self) -> bool {
        self.analysis_status == ANALYSIS_SUCCESS
    }
}

/// Body of `POST /users/link-data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkDataRequest {
    pub user_id: String,
    pub anon_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkDataResponse {
    pub updated_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = MoodRecordRequest {
            mood_emoji: Mood::Happy,
            intensity: Intensity::clamped(7),
            mood_text: "great day".to_string(),
            anon_id: "anon-1".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "mood_emoji": "happy",
                "intensity": 7,
                "mood_text": "great day",
                "anon_id": "anon-1",
            })
        );
    }

    #[test]
    fn test_response_ignores_extra_fields() {
        let resp: MoodRecordResponse = serde_json::from_str(
            r#"{"record_id":3,"record_date":"2025-01-01","saved":true,"analysis_status":"failed","analysis":null}"#,
        )
        .unwrap();
        assert_eq!(resp.record_id, 3);
        assert!(!resp.is_success());
        assert!(resp.analysis.is_none());
    }
}
