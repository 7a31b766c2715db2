//! Incremental parser for the upstream `text/event-stream` body.

/// Accumulates raw body bytes and hands back complete event blocks.
/// Carriage returns are dropped on the way in so `\r\n\r\n` and `\n\n`
/// frame events the same way.
#[derive(Debug, Default)]
pub struct SseBuffer {
    buffer: Vec<u8>,
}

impl SseBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_chunk(&mut self, chunk: &[u8]) {
        self.buffer.extend(chunk.iter().copied().filter(|b| *b != b'\r'));
    }

    /// Returns the next complete block (without its blank-line terminator),
    /// or `None` if the buffer holds only a partial event.
    pub fn next_event_block(&mut self) -> Option<String> {
        let boundary = self.buffer.windows(2).position(|w| w == b"\n\n")?;
        let remaining = self.buffer.split_off(boundary + 2);
        let mut block = std::mem::replace(&mut self.buffer, remaining);
        block.truncate(boundary);
        Some(String::from_utf8_lossy(&block).into_owned())
    }
}

/// Collects the payload of every `data:` line in a block.
pub fn parse_data_lines(event_block: &str) -> Vec<&str> {
    event_block
        .lines()
        .filter_map(|line| line.strip_prefix("data:"))
        .map(|data| data.strip_prefix(' ').unwrap_or(data))
        .collect()
}
