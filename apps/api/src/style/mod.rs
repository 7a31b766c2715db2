//! Style analysis: shallow stylistic signals derived from a writing sample.
//!
//! Sentence and token boundaries come from a `Tokenizer`; the analyzer only
//! counts and classifies what the tokenizer hands back.

pub mod analyzer;
pub mod tokenizer;

use thiserror::Error;

pub use analyzer::{analyze, WritingAnalysis};
pub use tokenizer::{Tokenizer, UnicodeTokenizer};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("text of {len} characters exceeds the maximum of {max}")]
    TextTooLong { len: usize, max: usize },
}
