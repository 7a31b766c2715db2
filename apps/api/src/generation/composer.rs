//! Prompt composition: turns an analysis plus the caller's request into the
//! instruction block sent to the model. Deterministic; every lookup has a fallback.

use crate::generation::prompts::{
    CONTENT_LENGTH_WORDS, CONTENT_TYPE_GUIDELINES, FALLBACK_GUIDELINE, FALLBACK_LENGTH,
    GENERIC_PROMPT_TEMPLATE, LINKEDIN_CONTENT_TYPE, LINKEDIN_PROMPT_TEMPLATE,
    STREAM_PROMPT_TEMPLATE,
};
use crate::models::generation::UserInfo;
use crate::style::WritingAnalysis;

/// Builds the full instruction for one generation request.
///
/// Tone is `preferred_tone` when present and non-empty, otherwise the detected
/// tone. `linkedinPost` gets the launch-announcement template; every other
/// content type gets the generic one with its guideline sentence.
pub fn compose(
    user_info: &UserInfo,
    analysis: &WritingAnalysis,
    content_type: &str,
    content_length: &str,
    prompt: &str,
    preferred_tone: Option<&str>,
) -> String {
    let tone = preferred_tone
        .filter(|t| !t.is_empty())
        .unwrap_or(analysis.tone.as_str());
    let guidelines = guideline_for(content_type);
    let word_count = word_count_for(content_length);

    let template = if content_type == LINKEDIN_CONTENT_TYPE {
        LINKEDIN_PROMPT_TEMPLATE
    } else {
        GENERIC_PROMPT_TEMPLATE
    };

    fill_template(
        template,
        &[
            ("job", user_info.job.as_str()),
            ("content_type", content_type),
            ("sample", analysis.sample.as_str()),
            ("guidelines", guidelines),
            ("prompt", prompt),
            ("word_count", word_count),
            ("tone", tone),
        ],
    )
}

/// The streaming path sends the instruction followed by the caller's request.
pub fn compose_stream_prompt(instruction: &str, prompt: &str) -> String {
    fill_template(
        STREAM_PROMPT_TEMPLATE,
        &[("instruction", instruction), ("prompt", prompt)],
    )
}

pub fn guideline_for(content_type: &str) -> &'static str {
    lookup(CONTENT_TYPE_GUIDELINES, content_type).unwrap_or(FALLBACK_GUIDELINE)
}

pub fn word_count_for(content_length: &str) -> &'static str {
    lookup(CONTENT_LENGTH_WORDS, content_length)
        .or_else(|| lookup(CONTENT_LENGTH_WORDS, FALLBACK_LENGTH))
        .unwrap_or_default()
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Replaces `{name}` placeholders in a single left-to-right pass.
/// Substituted values are never rescanned, and unknown `{...}` text is kept as is.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        rest = &rest[start..];

        let replacement = rest[1..].find('}').and_then(|end| {
            let key = &rest[1..=end];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, end + 2))
        });

        match replacement {
            Some((value, consumed)) => {
                out.push_str(value);
                rest = &rest[consumed..];
            }
            None => {
                out.push('{');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
