//! Gemini `generateContent` wire types. Only the fields this service reads or
//! writes are modelled.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerateContentRequest<'a> {
    pub(super) contents: Vec<Content<'a>>,
    pub(super) generation_config: GenerationConfig<'a>,
}

impl<'a> GenerateContentRequest<'a> {
    /// A single `user` turn carrying `text`, answered as plain text.
    pub(super) fn user_text(text: &'a str) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "text/plain",
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct Content<'a> {
    pub(super) role: &'a str,
    pub(super) parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
pub(super) struct Part<'a> {
    pub(super) text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerationConfig<'a> {
    pub(super) response_mime_type: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerateContentResponse {
    #[serde(default)]
    pub(super) candidates: Vec<Candidate>,
    pub(super) error: Option<ApiErrorBody>,
    pub(super) usage_metadata: Option<UsageMetadata>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts concatenated in order.
    pub(super) fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct Candidate {
    pub(super) content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CandidateContent {
    #[serde(default)]
    pub(super) parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ResponsePart {
    pub(super) text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UsageMetadata {
    #[serde(default)]
    pub(super) prompt_token_count: u64,
    #[serde(default)]
    pub(super) candidates_token_count: u64,
}

/// `{"error": {...}}` envelope Google APIs return on failure.
#[derive(Debug, Deserialize)]
pub(super) struct ErrorEnvelope {
    pub(super) error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub(super) struct ApiErrorBody {
    pub(super) message: String,
}
