// Content generation: prompt composition, the two generation endpoints,
// and SSE framing for the streaming one.
// Model calls go through the llm_client::TextGenerator in AppState.

pub mod composer;
pub mod handlers;
pub mod prompts;
pub mod sse;
