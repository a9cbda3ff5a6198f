//! The streaming relay: fragment sequences in, wire-ready event sequences out.
//!
//! Transport adapters frame each [`StreamEvent`] however their protocol
//! requires; everything protocol-independent (sanitization, ordering, the
//! single-terminal-event guarantee) lives here so it can be tested without
//! a socket.

pub mod sanitize;
pub mod stream;

pub use sanitize::{NEWLINE_TOKEN, restore_newlines, sanitize};
pub use stream::{END_TOKEN, ERROR_PREFIX, RelayStream, StreamEvent};
