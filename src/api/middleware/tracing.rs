//! HTTP request/response tracing middleware with per-request correlation ids.

use std::time::Duration;

use axum::http::Request;
use rand::Rng;
use rand::distr::Alphanumeric;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnBodyChunk, DefaultOnEos, DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

/// Opens a span for each request carrying a freshly generated correlation id
/// plus method and path.
///
/// The span is entered for everything that runs on behalf of the request, so
/// every log line emitted while handling it is tagged with `request_id` even
/// from code that never sees the id explicitly. Because the id lives in the
/// span rather than any shared variable, concurrent requests never observe
/// each other's id.
#[derive(Clone, Copy)]
pub struct MakeRequestSpan;

impl<B> tower_http::trace::MakeSpan<B> for MakeRequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let request_id = generate_request_id();
        tracing::info_span!(
            "request",
            %request_id,
            method = %request.method(),
            path = %request.uri().path(),
        )
    }
}

/// Logs `METHOD path` at info level when a request enters the system.
#[derive(Clone, Copy)]
pub struct RequestEntryLog;

impl<B> tower_http::trace::OnRequest<B> for RequestEntryLog {
    fn on_request(&mut self, request: &Request<B>, _span: &Span) {
        tracing::info!("{} {}", request.method(), request.uri().path());
    }
}

/// Suppresses the default failure log line.
///
/// 5xx details are already logged exactly once, with full context, by
/// [`crate::error::AppError::into_response`]; the default hook would emit a
/// second error line for the same request.
#[derive(Clone, Copy)]
pub struct SilentOnFailure;

impl<FailureClass> tower_http::trace::OnFailure<FailureClass> for SilentOnFailure {
    fn on_failure(&mut self, _failure: FailureClass, _latency: Duration, _span: &Span) {}
}

/// Creates the tracing middleware for HTTP requests.
///
/// # Example Logs
///
/// ```text
/// INFO request{request_id=h27sKdQm91xe method=GET path=/abc}: GET /abc
/// INFO request{request_id=h27sKdQm91xe method=GET path=/abc}: finished processing request latency=2 ms status=301
/// ```
pub fn layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    MakeRequestSpan,
    RequestEntryLog,
    DefaultOnResponse,
    DefaultOnBodyChunk,
    DefaultOnEos,
    SilentOnFailure,
> {
    TraceLayer::new_for_http()
        .make_span_with(MakeRequestSpan)
        .on_request(RequestEntryLog)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(SilentOnFailure)
}

/// Generates an opaque 12-character alphanumeric correlation token.
fn generate_request_id() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(12)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_are_unique_and_well_formed() {
        let a = generate_request_id();
        let b = generate_request_id();
        assert_eq!(a.len(), 12);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, b);
    }
}
