//! Server-Sent-Events framing for the streaming endpoint.

use std::convert::Infallible;

use axum::body::Body;
use axum::http::{header, HeaderValue, Response, StatusCode};
use futures::{Stream, StreamExt};

/// Payload of the final event of a successful stream.
pub const DONE_SENTINEL: &str = "[DONE]";

/// Frames `payload` as one event. Each line of a multi-line payload gets its
/// own `data:` line so a client reassembles it with `\n` between lines.
pub fn data_event(payload: &str) -> String {
    let normalized = payload.replace("\r\n", "\n").replace('\r', "\n");
    let mut event = String::with_capacity(normalized.len() + 8);
    for line in normalized.split('\n') {
        event.push_str("data: ");
        event.push_str(line);
        event.push('\n');
    }
    event.push('\n');
    event
}

pub fn done_event() -> String {
    data_event(DONE_SENTINEL)
}

pub fn error_event(message: &str) -> String {
    data_event(&format!("error: {message}"))
}

/// Wraps pre-framed events in a `text/event-stream` response that disables
/// caching and keeps the connection open.
pub fn sse_response<S>(events: S) -> Response<Body>
where
    S: Stream<Item = String> + Send + 'static,
{
    let body = Body::from_stream(events.map(Ok::<_, Infallible>));

    let mut response = Response::new(body);
    *response.status_mut() = StatusCode::OK;
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/event-stream"),
    );
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    response
}
