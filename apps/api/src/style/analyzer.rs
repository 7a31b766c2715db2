//! Writing-sample analysis: tone guess, vocabulary level, average sentence length.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::style::{AnalysisError, Tokenizer};

/// Fewer distinct alphabetic words than this reads as a simple vocabulary.
const SIMPLE_VOCAB_THRESHOLD: usize = 15;

/// Any one of these tokens (exact, case-sensitive) marks the sample as casual.
const CASUAL_MARKERS: &[&str] = &["I", "'s", "fun"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Casual,
    Formal,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Casual => "casual",
            Tone::Formal => "formal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VocabLevel {
    Simple,
    Advanced,
}

/// Stylistic summary of a writing sample. `sample` is the input, untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WritingAnalysis {
    pub tone: Tone,
    pub vocab_level: VocabLevel,
    pub avg_sentence_length: f64,
    pub sample: String,
}

/// Analyzes `sample` using `tokenizer` for sentence and token boundaries.
///
/// - `avg_sentence_length`: tokens per sentence, `0.0` when there are no sentences
/// - `vocab_level`: `Simple` below 15 distinct lowercased alphabetic tokens
/// - `tone`: `Casual` if any token is exactly `I`, `'s` or `fun`
pub fn analyze(tokenizer: &dyn Tokenizer, sample: &str) -> Result<WritingAnalysis, AnalysisError> {
    let sentences = tokenizer.tokenize(sample)?;
    let tokens = || sentences.iter().flat_map(|s| s.tokens.iter());

    let avg_sentence_length = if sentences.is_empty() {
        0.0
    } else {
        let total: usize = sentences.iter().map(|s| s.len()).sum();
        total as f64 / sentences.len() as f64
    };

    let vocab: HashSet<&str> = tokens()
        .filter(|t| t.is_alpha)
        .map(|t| t.lower.as_str())
        .collect();
    let vocab_level = if vocab.len() < SIMPLE_VOCAB_THRESHOLD {
        VocabLevel::Simple
    } else {
        VocabLevel::Advanced
    };

    let tone = if tokens().any(|t| CASUAL_MARKERS.contains(&t.text.as_str())) {
        Tone::Casual
    } else {
        Tone::Formal
    };

    Ok(WritingAnalysis {
        tone,
        vocab_level,
        avg_sentence_length,
        sample: sample.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::tokenizer::{Sentence, Token, UnicodeTokenizer};

    fn run(sample: &str) -> WritingAnalysis {
        analyze(&UnicodeTokenizer, sample).unwrap()
    }

    #[test]
    fn test_empty_sample_has_zero_average() {
        let analysis = run("");
        assert_eq!(analysis.avg_sentence_length, 0.0);
        assert_eq!(analysis.vocab_level, VocabLevel::Simple);
        assert_eq!(analysis.tone, Tone::Formal);
        assert_eq!(analysis.sample, "");
    }

    #[test]
    fn test_average_counts_punctuation_tokens() {
        // [I, love, it, .] + [It, 's, fun, !]
        let analysis = run("I love it. It's fun!");
        assert!((analysis.avg_sentence_length - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_first_person_pronoun_is_casual() {
        assert_eq!(run("I wrote the report.").tone, Tone::Casual);
    }

    #[test]
    fn test_possessive_marker_is_casual() {
        assert_eq!(run("The team's roadmap is public.").tone, Tone::Casual);
    }

    #[test]
    fn test_fun_is_casual_but_only_exact_case() {
        assert_eq!(run("Testing is fun.").tone, Tone::Casual);
        assert_eq!(run("Fun was had by all.").tone, Tone::Formal);
    }

    #[test]
    fn test_lowercase_i_is_not_casual() {
        assert_eq!(run("i think therefore.").tone, Tone::Formal);
    }

    #[test]
    fn test_formal_without_markers() {
        let analysis = run("The committee approved the revised budget.");
        assert_eq!(analysis.tone, Tone::Formal);
    }

    #[test]
    fn test_vocab_threshold_is_fifteen_distinct_words() {
        let fourteen = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima mike november.";
        assert_eq!(run(fourteen).vocab_level, VocabLevel::Simple);

        let fifteen = format!("{fourteen} Oscar.");
        assert_eq!(run(&fifteen).vocab_level, VocabLevel::Advanced);
    }

    #[test]
    fn test_vocab_is_case_insensitive_and_ignores_non_alpha() {
        let analysis = run("Data data DATA 42 42 42 !!!");
        assert_eq!(analysis.vocab_level, VocabLevel::Simple);
    }

    #[test]
    fn test_sample_is_echoed_verbatim() {
        let sample = "  Leading spaces, trailing newline.\n";
        assert_eq!(run(sample).sample, sample);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let sample = "We build compilers. I'm proud of it!";
        assert_eq!(run(sample), run(sample));
    }

    #[test]
    fn test_serializes_enums_as_lowercase_strings() {
        let json = serde_json::to_value(run("I did it.")).unwrap();
        assert_eq!(json["tone"], "casual");
        assert_eq!(json["vocab_level"], "simple");
        assert_eq!(json["sample"], "I did it.");
    }

    struct FixedTokenizer(Vec<Sentence>);

    impl Tokenizer for FixedTokenizer {
        fn tokenize(&self, _text: &str) -> Result<Vec<Sentence>, AnalysisError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_uses_tokenizer_boundaries() {
        let tokenizer = FixedTokenizer(vec![
            Sentence {
                tokens: vec![Token::new("a"), Token::new("b")],
            },
            Sentence {
                tokens: vec![Token::new("c")],
            },
        ]);
        let analysis = analyze(&tokenizer, "ignored").unwrap();
        assert!((analysis.avg_sentence_length - 1.5).abs() < f64::EPSILON);
    }

    struct FailingTokenizer;

    impl Tokenizer for FailingTokenizer {
        fn tokenize(&self, text: &str) -> Result<Vec<Sentence>, AnalysisError> {
            Err(AnalysisError::TextTooLong {
                len: text.len(),
                max: 0,
            })
        }
    }

    #[test]
    fn test_tokenizer_failure_propagates() {
        assert!(analyze(&FailingTokenizer, "x").is_err());
    }
}
