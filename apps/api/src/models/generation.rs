use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::style::WritingAnalysis;

pub const DEFAULT_CONTENT_TYPE: &str = "article";
pub const DEFAULT_CONTENT_LENGTH: &str = "medium";

/// The persona whose voice is imitated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub job: String,
}

/// Body of `POST /generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    pub user_info: UserInfo,
    pub writing_sample: String,
    pub prompt: String,
    #[serde(default = "default_content_type")]
    pub content_type: String,
    #[serde(default = "default_content_length")]
    pub content_length: String,
    #[serde(default)]
    pub preferred_tone: Option<String>,
}

impl GenerationRequest {
    /// Rejects requests with nothing to imitate or nothing to write about.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.writing_sample.trim().is_empty() {
            return Err(AppError::Validation(
                "writing_sample cannot be empty".to_string(),
            ));
        }
        if self.prompt.trim().is_empty() {
            return Err(AppError::Validation("prompt cannot be empty".to_string()));
        }
        Ok(())
    }
}

/// Query string of `GET /generate/stream`; `user_info` arrives flattened.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamQuery {
    #[serde(rename = "user_info__job")]
    pub job: String,
    pub writing_sample: String,
    pub prompt: String,
    #[serde(default = "default_content_type")]
    pub content_type: String,
    #[serde(default = "default_content_length")]
    pub content_length: String,
    #[serde(default)]
    pub preferred_tone: Option<String>,
}

impl From<StreamQuery> for GenerationRequest {
    fn from(query: StreamQuery) -> Self {
        Self {
            user_info: UserInfo { job: query.job },
            writing_sample: query.writing_sample,
            prompt: query.prompt,
            content_type: query.content_type,
            content_length: query.content_length,
            preferred_tone: query.preferred_tone,
        }
    }
}

/// Response of `POST /generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub content: String,
    pub analysis: WritingAnalysis,
}

fn default_content_type() -> String {
    DEFAULT_CONTENT_TYPE.to_string()
}

fn default_content_length() -> String {
    DEFAULT_CONTENT_LENGTH.to_string()
}
