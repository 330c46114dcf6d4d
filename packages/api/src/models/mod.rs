//! Wire models shared with the MoodPing backend.

mod mood;
mod record;
mod user;

pub use mood::{Intensity, Mood};
pub use record::{
    AnalysisResult, LinkDataRequest, LinkDataResponse, MoodRecordRequest, MoodRecordResponse,
    ANALYSIS_SUCCESS,
};
pub use user::UserInfo;
