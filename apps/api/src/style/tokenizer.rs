//! Sentence and token segmentation.
//!
//! `AppState` holds an `Arc<dyn Tokenizer>`; `UnicodeTokenizer` is the default
//! and is backed by the UAX #29 segmentation rules of `unicode-segmentation`.

use unicode_segmentation::UnicodeSegmentation;

use crate::style::AnalysisError;

/// Longest input the tokenizer accepts, in characters.
pub const MAX_TEXT_CHARS: usize = 1_000_000;

/// English clitics split off the end of a word segment.
const CLITICS: &[&str] = &[
    "n't", "n’t", "'s", "’s", "'re", "’re", "'ve", "’ve", "'ll", "’ll", "'d", "’d", "'m", "’m",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub lower: String,
    pub is_alpha: bool,
}

impl Token {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            lower: text.to_lowercase(),
            is_alpha: !text.is_empty() && text.chars().all(char::is_alphabetic),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub tokens: Vec<Token>,
}

impl Sentence {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Splits raw text into ordered sentences of ordered tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<Sentence>, AnalysisError>;
}

/// UAX #29 sentence and word segmentation with English clitic splitting.
/// Whitespace is never a token; punctuation is.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeTokenizer;

impl Tokenizer for UnicodeTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Sentence>, AnalysisError> {
        let len = text.chars().count();
        if len > MAX_TEXT_CHARS {
            return Err(AnalysisError::TextTooLong {
                len,
                max: MAX_TEXT_CHARS,
            });
        }

        let sentences = text
            .split_sentence_bounds()
            .map(|raw| Sentence {
                tokens: raw
                    .split_word_bounds()
                    .filter(|segment| !segment.chars().all(char::is_whitespace))
                    .flat_map(split_clitic)
                    .map(Token::new)
                    .collect(),
            })
            .filter(|sentence| !sentence.is_empty())
            .collect();

        Ok(sentences)
    }
}

/// `it's` -> [`it`, `'s`], `don't` -> [`do`, `n't`]; anything else is returned whole.
fn split_clitic(word: &str) -> Vec<&str> {
    for clitic in CLITICS {
        if word.len() <= clitic.len() {
            continue;
        }
        let at = word.len() - clitic.len();
        let Some(suffix) = word.get(at..) else {
            continue;
        };
        if suffix.eq_ignore_ascii_case(clitic) {
            return vec![&word[..at], suffix];
        }
    }
    vec![word]
}
