//! Tracing integration for outcome-rail.
//!
//! This module provides utilities for integrating outcomes with the
//! `tracing` ecosystem: emitting the reason trail as events, and capturing
//! span information as failure causes.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::error::Error;

use tracing::Span;

use crate::traits::FailureTrace;
use crate::types::{DefaultFailure, ExceptionalFailure, Failure, Outcome, Reason};

/// Emits the reasons of an outcome as tracing events.
///
/// # Example
///
/// ```rust,ignore
/// use outcome_rail::tracing_ext::TraceReasons;
///
/// let outcome = import_batch(rows);
/// outcome.trace_reasons();
/// ```
pub trait TraceReasons {
    /// Emits one `INFO` event per success and one `WARN` event per failure
    /// node (nested causes included, with their depth), then a `DEBUG`
    /// summary with the status.
    fn trace_reasons(&self);
}

impl<T> TraceReasons for Outcome<T> {
    fn trace_reasons(&self) {
        for (index, reason) in self.reasons().iter().enumerate() {
            match reason {
                Reason::Success(success) => {
                    tracing::info!(target: "outcome_rail", index, reason = %success, "success");
                }
                Reason::Failure(failure) => {
                    for (depth, node) in failure.iter_tree() {
                        tracing::warn!(
                            target: "outcome_rail",
                            index,
                            depth,
                            exceptional = node.is_exceptional(),
                            reason = %node,
                            "failure"
                        );
                    }
                }
            }
        }
        tracing::debug!(
            target: "outcome_rail",
            status = %self.status(),
            reasons = self.reason_count(),
            "outcome traced"
        );
    }
}

/// Converts a tracing span to a failure cause.
///
/// Extracts the span name; a disabled span yields `unknown`.
fn span_to_failure(span: &Span) -> DefaultFailure {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    DefaultFailure::new(format!("in span '{}'", name))
}

/// Extension trait turning `Result` values into outcomes annotated with span context.
pub trait ResultSpanExt<T> {
    /// Converts into an outcome; on error the exceptional failure is caused
    /// by the current span.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use outcome_rail::tracing_ext::ResultSpanExt;
    ///
    /// fn process() -> Outcome<Data> {
    ///     do_work().with_current_span()
    /// }
    /// ```
    fn with_current_span(self) -> Outcome<T>;

    /// Like [`with_current_span`](ResultSpanExt::with_current_span), for a specific span.
    fn with_span(self, span: &Span) -> Outcome<T>;
}

impl<T, E> ResultSpanExt<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    fn with_current_span(self) -> Outcome<T> {
        self.with_span(&Span::current())
    }

    fn with_span(self, span: &Span) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::successful().with_value(value),
            Err(error) => Outcome::failed()
                .with_failure(ExceptionalFailure::new(error).with_cause(span_to_failure(span))),
        }
    }
}

/// Attaches the current span as a cause of `failure`.
///
/// # Example
///
/// ```rust,ignore
/// use outcome_rail::tracing_ext::instrument_failure;
///
/// let failure = instrument_failure(Failure::new("quota exceeded"));
/// // failure.reasons() now holds "in span '<current span>'"
/// ```
pub fn instrument_failure<F: Into<Failure>>(failure: F) -> Failure {
    failure.into().with_cause(span_to_failure(&Span::current()))
}
