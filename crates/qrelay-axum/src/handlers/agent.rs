//! Agent handlers - the relay ask endpoint.

use std::convert::Infallible;
use std::pin::Pin;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::sse::{Event, Sse};
use futures_util::stream::Stream;
use futures_util::{StreamExt, stream};
use serde::Deserialize;
use tracing::debug;

use qrelay_core::{AgentError, AnswerStream, NEWLINE_TOKEN, RelayStream, StreamEvent};

use crate::error::HttpError;
use crate::state::AppState;

/// Wire event sequence for one relayed answer.
type EventStream = Pin<Box<dyn Stream<Item = Result<Event, Infallible>> + Send>>;

/// Query parameters for the ask endpoint.
#[derive(Debug, Deserialize)]
pub struct AskParams {
    /// The user query; a missing parameter and a blank one are equivalent.
    #[serde(default)]
    pub query: Option<String>,
}

/// Relay one query as a server-sent event stream.
///
/// Always answers `200 text/event-stream`: validation failures and
/// upstream errors are reported in-stream as `ERROR:` frames, and every
/// completed stream ends with exactly one terminal frame. No keep-alive
/// comments are sent; every byte on the wire belongs to a protocol frame.
///
/// The response stream is pulled, not pumped: no task is spawned, so a
/// caller disconnect drops the stream chain and cancels the upstream
/// completion call.
pub async fn ask(
    State(state): State<AppState>,
    params: Result<Query<AskParams>, QueryRejection>,
) -> Result<Sse<EventStream>, HttpError> {
    let Query(params) = params.map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;
    let query = params.query.unwrap_or_default();

    // Blank queries never reach the agent.
    let answers: AnswerStream = if query.trim().is_empty() {
        debug!("rejecting blank query");
        stream::once(async { Err(AgentError::EmptyQuery) }).boxed()
    } else {
        debug!(query_len = query.len(), "relaying query");
        match state.agent.ask(&query).await {
            Ok(answers) => answers,
            Err(error) => stream::once(async move { Err(error) }).boxed(),
        }
    };

    let events = RelayStream::new(answers).map(|event| Ok(wire_event(event)));
    Ok(Sse::new(Box::pin(events)))
}

/// Map one relay event onto the SSE wire.
fn wire_event(event: StreamEvent) -> Event {
    // The SSE writer rejects CR in a field value; fold it like the
    // newline it is.
    let payload = event.into_wire_payload().replace('\r', NEWLINE_TOKEN);
    Event::default().data(payload)
}
