//! Event stream adapter enforcing the relay's framing contract.

use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use pin_project_lite::pin_project;

use super::sanitize::sanitize;

/// Payload of the terminal event for a normally completed stream.
pub const END_TOKEN: &str = "END||";

/// Payload prefix of the terminal event for a failed stream.
pub const ERROR_PREFIX: &str = "ERROR: ";

/// One wire-level unit of the outbound stream.
///
/// Every relayed response is a sequence of zero or more `Data` events
/// followed by exactly one terminal event. Nothing follows a terminal
/// event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// A frame-safe (already sanitized) fragment of the answer.
    Data(String),
    /// Terminal: the fragment source completed without error.
    End,
    /// Terminal: the stream failed; carries the sanitized message.
    Error(String),
}

impl StreamEvent {
    /// Whether this event closes the stream.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::End | Self::Error(_))
    }

    /// Render the frame payload exactly as it appears on the wire.
    #[must_use]
    pub fn into_wire_payload(self) -> String {
        match self {
            Self::Data(text) => text,
            Self::End => END_TOKEN.to_string(),
            Self::Error(message) => format!("{ERROR_PREFIX}{message}"),
        }
    }
}

pin_project! {
    /// Adapts a fallible fragment stream into a [`StreamEvent`] sequence.
    ///
    /// Guarantees, independent of the source's behavior:
    ///
    /// - events come out in source order, one per fragment, unbatched;
    /// - every fragment (including the empty one) is sanitized for framing;
    /// - the sequence ends with exactly one terminal event: [`StreamEvent::End`]
    ///   on exhaustion, or [`StreamEvent::Error`] on the first source error,
    ///   after which the source is never polled again;
    /// - dropping the adapter drops the source, cancelling whatever work
    ///   feeds it.
    pub struct RelayStream<S> {
        #[pin]
        source: S,
        finished: bool,
    }
}

impl<S> RelayStream<S> {
    /// Wrap a fragment source.
    pub const fn new(source: S) -> Self {
        Self {
            source,
            finished: false,
        }
    }
}

impl<S, E> Stream for RelayStream<S>
where
    S: Stream<Item = Result<String, E>>,
    E: fmt::Display,
{
    type Item = StreamEvent;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();

        if *this.finished {
            return Poll::Ready(None);
        }

        match this.source.poll_next(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Some(Ok(fragment))) => {
                Poll::Ready(Some(StreamEvent::Data(sanitize(&fragment))))
            }
            Poll::Ready(Some(Err(error))) => {
                *this.finished = true;
                Poll::Ready(Some(StreamEvent::Error(sanitize(&error.to_string()))))
            }
            Poll::Ready(None) => {
                *this.finished = true;
                Poll::Ready(Some(StreamEvent::End))
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
