use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Body of `POST /parse-resume`.
#[derive(Debug, Clone, Deserialize)]
pub struct ParseResumeRequest {
    pub file_url: String,
    #[serde(default)]
    pub job_requirements: Vec<String>,
}

/// Information extracted from one resume. Skills serialize in sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResult {
    pub skills: BTreeSet<String>,
    pub experience: String,
    pub education: String,
    pub email: String,
    pub phone: String,
    pub score: u32, // 0 – 100
}

/// Success envelope for `POST /parse-resume`. Failures go through `AppError`.
#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ParsedResult>,
}
