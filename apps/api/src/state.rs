use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::style::Tokenizer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Generation backend. Default: GeminiClient.
    pub llm: Arc<dyn TextGenerator>,
    /// Sentence/token segmentation for style analysis. Default: UnicodeTokenizer.
    pub tokenizer: Arc<dyn Tokenizer>,
    pub config: Config,
}
