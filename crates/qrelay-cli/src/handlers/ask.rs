//! Ask command handler.
//!
//! Relays one query from the terminal and prints the answer as it
//! arrives. The handler drives the same event machine as the HTTP
//! surface and acts as a receiver of its protocol: sanitized newline
//! tokens are reversed back to newlines for display.

use std::io::{self, Write};

use anyhow::{Result, bail};
use futures_util::{Stream, StreamExt};

use qrelay_core::{RelayStream, StreamEvent, restore_newlines};

use crate::bootstrap::CliContext;

/// Execute the ask command.
///
/// Fragments are written to stdout the moment they arrive, flushed one
/// by one so long answers render progressively.
pub async fn execute(ctx: &CliContext, query: &str) -> Result<()> {
    let answers = ctx.agent().ask(query).await?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_answer(RelayStream::new(answers), &mut out).await
}

/// Write the relayed answer to `out`, one event at a time.
///
/// Data payloads have their newline tokens restored before printing;
/// normal completion appends a trailing newline so the shell prompt
/// lands on its own line. A terminal error fails the command after the
/// partial answer has been printed.
async fn write_answer<S, W>(mut events: S, out: &mut W) -> Result<()>
where
    S: Stream<Item = StreamEvent> + Unpin,
    W: Write,
{
    while let Some(event) = events.next().await {
        match event {
            StreamEvent::Data(payload) => {
                write!(out, "{}", restore_newlines(&payload))?;
                out.flush()?;
            }
            StreamEvent::End => writeln!(out)?,
            StreamEvent::Error(message) => bail!("{}", restore_newlines(&message)),
        }
    }
    Ok(())
}
