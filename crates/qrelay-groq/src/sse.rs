//! SSE chunk parsing for streaming completion responses.
//!
//! The provider frames its streaming output as `data: {json}` blocks
//! separated by blank lines, terminated by `data: [DONE]`. Network chunks
//! do not respect block boundaries, so bytes are buffered until a complete
//! block is available.

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures_core::Stream;
use pin_project_lite::pin_project;
use tracing::{debug, warn};

use qrelay_core::{CompletionError, FragmentResult};

use crate::types::ChatChunk;

/// Sentinel data payload closing a provider chunk stream.
const DONE_MARKER: &str = "[DONE]";

/// One network chunk, or the transport failure that ended the response.
pub type ByteResult = Result<Bytes, CompletionError>;

pin_project! {
    /// Adapts a raw response byte stream into a stream of text fragments.
    ///
    /// Yields one fragment per chunk that carries delta content, skips
    /// chunks that do not (role preamble, finish marker), and ends at the
    /// `[DONE]` sentinel. After yielding an error the stream is finished;
    /// the source is never polled again.
    pub struct ChunkStream {
        #[pin]
        inner: Pin<Box<dyn Stream<Item = ByteResult> + Send>>,
        buffer: Vec<u8>,
        done: bool,
    }
}

impl ChunkStream {
    /// Wrap a response byte stream.
    pub fn new(inner: Pin<Box<dyn Stream<Item = ByteResult> + Send>>) -> Self {
        Self {
            inner,
            buffer: Vec::new(),
            done: false,
        }
    }
}

/// What a complete `data:` block contributes to the fragment stream.
enum BlockOutcome {
    /// A text fragment to yield.
    Fragment(String),
    /// The `[DONE]` sentinel; the stream is over.
    Done,
    /// A block with nothing to relay (comment, preamble, finish chunk).
    Skip,
    /// A block whose payload could not be interpreted.
    Malformed(String),
}

/// Parse one block (the bytes between blank-line separators).
///
/// Per the SSE format the last `data:` line wins; the provider sends
/// exactly one per block.
fn parse_block(block: &[u8]) -> BlockOutcome {
    let Ok(block) = std::str::from_utf8(block) else {
        return BlockOutcome::Malformed("non-UTF-8 data in event stream".to_string());
    };

    let mut data: Option<&str> = None;
    for line in block.lines() {
        if let Some(value) = line.strip_prefix("data:") {
            data = Some(value.trim());
        }
    }

    let Some(data) = data else {
        return BlockOutcome::Skip;
    };

    if data == DONE_MARKER {
        return BlockOutcome::Done;
    }

    match serde_json::from_str::<ChatChunk>(data) {
        Ok(chunk) => match chunk.into_delta_content() {
            Some(content) => BlockOutcome::Fragment(content),
            None => BlockOutcome::Skip,
        },
        Err(error) => {
            warn!(error = %error, "unparseable stream chunk");
            BlockOutcome::Malformed(format!("unparseable stream chunk: {error}"))
        }
    }
}

impl Stream for ChunkStream {
    type Item = FragmentResult;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.done {
            return Poll::Ready(None);
        }

        loop {
            // Drain blocks already buffered before polling for more bytes.
            while let Some(end) = this
                .buffer
                .windows(2)
                .position(|separator| separator == b"\n\n")
            {
                let mut block: Vec<u8> = this.buffer.drain(..end + 2).collect();
                block.truncate(end);

                match parse_block(&block) {
                    BlockOutcome::Fragment(content) => return Poll::Ready(Some(Ok(content))),
                    BlockOutcome::Done => {
                        *this.done = true;
                        return Poll::Ready(None);
                    }
                    BlockOutcome::Skip => {}
                    BlockOutcome::Malformed(message) => {
                        *this.done = true;
                        return Poll::Ready(Some(Err(CompletionError::InvalidResponse(message))));
                    }
                }
            }

            match this.inner.as_mut().poll_next(cx) {
                Poll::Ready(Some(Ok(bytes))) => this.buffer.extend_from_slice(&bytes),
                Poll::Ready(Some(Err(error))) => {
                    *this.done = true;
                    return Poll::Ready(Some(Err(error)));
                }
                Poll::Ready(None) => {
                    if !this.buffer.is_empty() {
                        debug!(
                            remaining = this.buffer.len(),
                            "event stream ended with unparsed data"
                        );
                    }
                    *this.done = true;
                    return Poll::Ready(None);
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}
