//! Server-sent event decoding for the user stream

use super::error::FeedError;
use super::types::Notification;
use futures::stream::BoxStream;
use futures::StreamExt;
use std::collections::VecDeque;

/// One dispatched server-sent event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseMessage {
    pub event: String,
    pub data: String,
}

/// Incremental SSE decoder; accepts arbitrary byte chunks
#[derive(Debug, Default)]
pub struct SseDecoder {
    buf: Vec<u8>,
    event: Option<String>,
    data: Vec<String>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk and collect every event it completes
    pub fn push(&mut self, chunk: &[u8]) -> Vec<SseMessage> {
        self.buf.extend_from_slice(chunk);

        let mut out = Vec::new();
        while let Some(pos) = self.buf.iter().position(|b| *b == b'\n') {
            let raw: Vec<u8> = self.buf.drain(..=pos).collect();
            let line = String::from_utf8_lossy(&raw);
            let line = line.trim_end_matches(['\n', '\r']);
            if let Some(message) = self.process_line(line) {
                out.push(message);
            }
        }
        out
    }

    fn process_line(&mut self, line: &str) -> Option<SseMessage> {
        if line.is_empty() {
            return self.dispatch();
        }
        if line.starts_with(':') {
            // heartbeat
            return None;
        }

        let (field, value) = line.split_once(':').unwrap_or((line, ""));
        let value = value.strip_prefix(' ').unwrap_or(value);
        match field {
            "event" => self.event = Some(value.to_string()),
            "data" => self.data.push(value.to_string()),
            _ => {}
        }
        None
    }

    fn dispatch(&mut self) -> Option<SseMessage> {
        let event = self.event.take();
        if self.data.is_empty() {
            return None;
        }
        let data = std::mem::take(&mut self.data).join("\n");
        Some(SseMessage {
            event: event.unwrap_or_else(|| "message".to_string()),
            data,
        })
    }
}

/// Notifications decoded from a streaming response
pub struct NotificationStream {
    body: BoxStream<'static, Result<Vec<u8>, reqwest::Error>>,
    decoder: SseDecoder,
    pending: VecDeque<SseMessage>,
}

impl NotificationStream {
    pub fn new(response: reqwest::Response) -> Self {
        Self {
            body: response.bytes_stream().map(|chunk| chunk.map(|b| b.to_vec())).boxed(),
            decoder: SseDecoder::new(),
            pending: VecDeque::new(),
        }
    }

    /// Next notification; `None` once the server closes the stream.
    ///
    /// Events other than `notification` are skipped, as are payloads that
    /// fail to decode.
    pub async fn next(&mut self) -> Option<Result<Notification, FeedError>> {
        loop {
            while let Some(message) = self.pending.pop_front() {
                if message.event != "notification" {
                    continue;
                }
                match serde_json::from_str::<Notification>(&message.data) {
                    Ok(notification) => return Some(Ok(notification)),
                    Err(e) => {
                        tracing::warn!(error = %e, "Skipping undecodable notification");
                    }
                }
            }

            match self.body.next().await? {
                Ok(chunk) => self.pending.extend(self.decoder.push(&chunk)),
                Err(e) => return Some(Err(FeedError::network(format!("Stream interrupted: {e}")))),
            }
        }
    }
}
