//! Learning progress seeded when a local session starts.

use serde::Deserialize;
use serde::Serialize;

/// Course progress buckets, all empty for a new session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningProgress {
    pub active_courses: Vec<String>,
    pub finished_courses: Vec<String>,
    pub up_next: Vec<String>,
}
