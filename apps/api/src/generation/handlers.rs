//! Axum route handlers for the Generation API.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::Response,
    Json,
};
use futures::{Stream, StreamExt};
use serde_json::{json, Value};
use tracing::{debug, error, info};

use crate::errors::AppError;
use crate::generation::composer::{compose, compose_stream_prompt};
use crate::generation::prompts::{CONTENT_LENGTH_WORDS, CONTENT_TYPE_GUIDELINES};
use crate::generation::sse::{data_event, done_event, error_event, sse_response};
use crate::models::generation::{
    GenerationRequest, GenerationResponse, StreamQuery, DEFAULT_CONTENT_LENGTH,
    DEFAULT_CONTENT_TYPE,
};
use crate::state::AppState;
use crate::style::{analyze, WritingAnalysis};

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /generate
///
/// Analyze → compose → generate, returned as one JSON document.
/// The model receives the raw `prompt` unless `GENERATE_SEND_INSTRUCTION` is set;
/// the composed instruction is always built and its length logged.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerationResponse>, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    let (analysis, instruction) = prepare(&state, &request).await?;
    let model_prompt = if state.config.generate_send_instruction {
        instruction.as_str()
    } else {
        request.prompt.as_str()
    };

    debug!(
        "Generating {} for '{}' ({} chars sent, instruction {} chars)",
        request.content_type,
        request.user_info.job,
        model_prompt.len(),
        instruction.len()
    );
    let content = state.llm.generate(model_prompt).await?;

    Ok(Json(GenerationResponse { content, analysis }))
}

/// GET /generate/stream
///
/// Same pipeline as `POST /generate`, but the model receives the composed
/// instruction plus the request, and fragments are relayed as SSE events.
/// Bad parameters fail with 400 before the stream opens; anything after that
/// is reported in-band as a final `data: error: ...` event.
pub async fn handle_generate_stream(
    State(state): State<AppState>,
    query: Result<Query<StreamQuery>, QueryRejection>,
) -> Result<Response<Body>, AppError> {
    let Query(query) = query?;
    let request = GenerationRequest::from(query);
    request.validate()?;

    info!(
        "Opening generation stream: content_type={}, content_length={}",
        request.content_type, request.content_length
    );
    Ok(sse_response(relay_events(state, request)))
}

/// GET /generate/options
///
/// Content types and length buckets the composer knows about, with defaults.
pub async fn handle_generation_options() -> Json<Value> {
    let content_types: Vec<Value> = CONTENT_TYPE_GUIDELINES
        .iter()
        .map(|(id, guideline)| json!({ "id": id, "guideline": guideline }))
        .collect();
    let content_lengths: Vec<Value> = CONTENT_LENGTH_WORDS
        .iter()
        .map(|(id, words)| json!({ "id": id, "words": words }))
        .collect();

    Json(json!({
        "content_types": content_types,
        "content_lengths": content_lengths,
        "defaults": {
            "content_type": DEFAULT_CONTENT_TYPE,
            "content_length": DEFAULT_CONTENT_LENGTH,
        }
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Segmentation is CPU-bound, so analysis runs on the blocking pool.
async fn prepare(
    state: &AppState,
    request: &GenerationRequest,
) -> Result<(WritingAnalysis, String), AppError> {
    let tokenizer = Arc::clone(&state.tokenizer);
    let sample = request.writing_sample.clone();
    let analysis = tokio::task::spawn_blocking(move || analyze(tokenizer.as_ref(), &sample))
        .await
        .map_err(anyhow::Error::from)??;
    let instruction = compose(
        &request.user_info,
        &analysis,
        &request.content_type,
        &request.content_length,
        &request.prompt,
        request.preferred_tone.as_deref(),
    );
    Ok((analysis, instruction))
}

/// Framed events for one streaming request, in upstream order, ending with
/// exactly one `[DONE]` or `error:` event. Dropping the stream (client gone)
/// drops the upstream response with it.
fn relay_events(state: AppState, request: GenerationRequest) -> impl Stream<Item = String> + Send {
    async_stream::stream! {
        let prompt = match prepare(&state, &request).await {
            Ok((_, instruction)) => compose_stream_prompt(&instruction, &request.prompt),
            Err(e) => {
                error!("Error preparing stream: {e}");
                yield error_event(&e.to_string());
                return;
            }
        };

        let mut fragments = match state.llm.generate_stream(&prompt).await {
            Ok(fragments) => fragments,
            Err(e) => {
                error!("Error opening generation stream: {e}");
                yield error_event(&e.to_string());
                return;
            }
        };

        let mut relayed = 0usize;
        while let Some(fragment) = fragments.next().await {
            match fragment {
                Ok(text) => {
                    relayed += 1;
                    yield data_event(&text);
                }
                Err(e) => {
                    error!("Error in generation stream after {relayed} fragments: {e}");
                    yield error_event(&e.to_string());
                    return;
                }
            }
        }

        debug!("Generation stream complete: {relayed} fragments");
        yield done_event();
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
