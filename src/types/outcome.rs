//! Outcome container with status, optional payload and an ordered reason trail.
//!
//! This module provides [`Outcome`], which records:
//! - a [`Status`] that latches to [`Status::Failed`] as soon as any failure
//!   reason is attached,
//! - an optional payload (a value, the [`NoValue`] sentinel, or nothing when
//!   failed from birth),
//! - every [`Reason`] added, in insertion order.
//!
//! An outcome belongs to the single operation that built it. Mutators take
//! `self` (builder chains) or `&mut self` (incremental and all-or-nothing
//! updates).

use crate::types::accumulator::Accumulator;
use crate::types::alloc_type::{String, Vec};
use crate::types::{
    DefaultFailure, ErrorVec, ExceptionalFailure, Failure, NoValue, OutcomeError, Reason, Success,
};
use core::error::Error;
use core::fmt;
use core::marker::PhantomData;

/// Whether an [`Outcome`] is successful or failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Successful,
    Failed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Successful => f.write_str("successful"),
            Self::Failed => f.write_str("failed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Payload<T> {
    Value(T),
    NoValue,
    Absent,
}

/// Entry handle returned by [`Outcome::successful`].
///
/// It only offers the terminal constructors: a successful outcome either
/// carries a value or is explicitly value-less.
#[must_use]
#[derive(Debug)]
pub struct Successful<T> {
    _payload: PhantomData<fn() -> T>,
}

impl<T> Successful<T> {
    /// Builds a successful outcome holding `value`.
    #[inline]
    pub fn with_value(self, value: T) -> Outcome<T> {
        Outcome::new(Status::Successful, Payload::Value(value))
    }

    /// Builds a successful outcome from a value that may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::EmptyValue`] for `None`; operations without a
    /// payload use `Outcome<NoValue>` and [`with_no_value`](Successful::with_no_value).
    #[inline]
    pub fn try_with_value(self, value: Option<T>) -> Result<Outcome<T>, OutcomeError> {
        value
            .map(|value| self.with_value(value))
            .ok_or(OutcomeError::EmptyValue)
    }
}

impl Successful<NoValue> {
    /// Builds a successful outcome without payload.
    #[inline]
    pub fn with_no_value(self) -> Outcome<NoValue> {
        Outcome::new(Status::Successful, Payload::NoValue)
    }
}

/// Status, optional payload and ordered reasons of one operation.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Message, Outcome, OutcomeError};
///
/// let outcome = Outcome::successful()
///     .with_value(42)
///     .with_success_message("answer computed");
/// assert_eq!(outcome.value(), Ok(&42));
///
/// let outcome = outcome.with_failure_message("answer rejected");
/// assert!(outcome.is_failed());
/// assert_eq!(outcome.value(), Err(OutcomeError::ReadWhileFailed));
/// assert_eq!(outcome.failures()[0].message(), "answer rejected");
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    status: Status,
    payload: Payload<T>,
    reasons: Accumulator<Reason>,
}

impl<T> Outcome<T> {
    #[inline]
    fn new(status: Status, payload: Payload<T>) -> Self {
        Self {
            status,
            payload,
            reasons: Accumulator::new(),
        }
    }

    /// Starts a successful outcome; finish it with `with_value` or `with_no_value`.
    #[inline]
    pub fn successful() -> Successful<T> {
        Successful {
            _payload: PhantomData,
        }
    }

    /// Creates an outcome that is failed from birth and carries no value.
    #[inline]
    pub fn failed() -> Self {
        Self::new(Status::Failed, Payload::Absent)
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn is_successful(&self) -> bool {
        self.status == Status::Successful
    }

    #[inline]
    pub fn is_failed(&self) -> bool {
        !self.is_successful()
    }

    /// Returns the stored value.
    ///
    /// # Errors
    ///
    /// - [`OutcomeError::ReadWhileFailed`] if the outcome is failed.
    /// - [`OutcomeError::ReadFromNoValue`] if it was built with `with_no_value`.
    pub fn value(&self) -> Result<&T, OutcomeError> {
        if self.is_failed() {
            return Err(OutcomeError::ReadWhileFailed);
        }
        match &self.payload {
            Payload::Value(value) => Ok(value),
            Payload::NoValue => Err(OutcomeError::ReadFromNoValue),
            Payload::Absent => Err(OutcomeError::ReadWhileFailed),
        }
    }

    /// Consuming form of [`value`](Outcome::value), with the same errors.
    pub fn into_value(self) -> Result<T, OutcomeError> {
        if self.is_failed() {
            return Err(OutcomeError::ReadWhileFailed);
        }
        match self.payload {
            Payload::Value(value) => Ok(value),
            Payload::NoValue => Err(OutcomeError::ReadFromNoValue),
            Payload::Absent => Err(OutcomeError::ReadWhileFailed),
        }
    }

    /// Appends a [`DefaultFailure`] built from `message` and marks the outcome failed.
    #[inline]
    pub fn with_failure_message<S: Into<String>>(self, message: S) -> Self {
        self.with_reason(DefaultFailure::new(message))
    }

    /// Appends `failure` and marks the outcome failed.
    #[inline]
    pub fn with_failure<F: Into<Failure>>(self, failure: F) -> Self {
        self.with_reason(Reason::Failure(failure.into()))
    }

    /// Appends every failure in order and marks the outcome failed, even when
    /// `failures` is empty.
    #[inline]
    pub fn with_failures<I>(mut self, failures: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Failure>,
    {
        self.latch_failed();
        self.with_reasons(failures.into_iter().map(|failure| Reason::Failure(failure.into())))
    }

    /// Wraps `error` in an [`ExceptionalFailure`], appends it and marks the outcome failed.
    #[inline]
    pub fn with_exceptional_failure<E>(self, error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.with_reason(ExceptionalFailure::new(error))
    }

    /// Appends a [`Success`] built from `message`. The status is left as is.
    #[inline]
    pub fn with_success_message<S: Into<String>>(self, message: S) -> Self {
        self.with_reason(Success::new(message))
    }

    /// Appends `success`. The status is left as is.
    #[inline]
    pub fn with_success(self, success: Success) -> Self {
        self.with_reason(success)
    }

    /// Appends every success in order. The status is left as is.
    #[inline]
    pub fn with_successes<I>(self, successes: I) -> Self
    where
        I: IntoIterator<Item = Success>,
    {
        self.with_reasons(successes.into_iter().map(Reason::Success))
    }

    /// Appends any reason. A failure marks the outcome failed, whichever
    /// method it came through.
    #[inline]
    pub fn with_reason<R: Into<Reason>>(mut self, reason: R) -> Self {
        self.push_reason(reason);
        self
    }

    /// Appends every reason in order, applying the failure latch per reason.
    #[inline]
    pub fn with_reasons<I>(mut self, reasons: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Reason>,
    {
        for reason in reasons {
            self.push_reason(reason);
        }
        self
    }

    /// In-place form of [`with_reason`](Outcome::with_reason).
    pub fn push_reason<R: Into<Reason>>(&mut self, reason: R) -> &mut Self {
        let reason = reason.into();
        if reason.is_failure() {
            self.latch_failed();
        }
        self.reasons.push(reason);
        self
    }

    /// Appends every failure, or none when any entry is absent. On success the
    /// outcome is failed, even when `failures` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::MissingArgument`] if an entry is `None`; the
    /// reasons and the status are left untouched.
    pub fn try_extend_failures<I, F>(&mut self, failures: I) -> Result<&mut Self, OutcomeError>
    where
        I: IntoIterator<Item = Option<F>>,
        F: Into<Failure>,
    {
        let staged: Accumulator<Failure> = Accumulator::try_from_present(failures, "failure")?;
        self.latch_failed();
        for failure in staged {
            self.push_reason(failure);
        }
        Ok(self)
    }

    /// Appends every success, or none when any entry is absent.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::MissingArgument`] if an entry is `None`.
    pub fn try_extend_successes<I>(&mut self, successes: I) -> Result<&mut Self, OutcomeError>
    where
        I: IntoIterator<Item = Option<Success>>,
    {
        let staged: Accumulator<Success> = Accumulator::try_from_present(successes, "success")?;
        for success in staged {
            self.push_reason(success);
        }
        Ok(self)
    }

    /// Appends every reason, or none when any entry is absent.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::MissingArgument`] if an entry is `None`.
    pub fn try_extend_reasons<I, R>(&mut self, reasons: I) -> Result<&mut Self, OutcomeError>
    where
        I: IntoIterator<Item = Option<R>>,
        R: Into<Reason>,
    {
        let staged: Accumulator<Reason> = Accumulator::try_from_present(reasons, "reason")?;
        for reason in staged {
            self.push_reason(reason);
        }
        Ok(self)
    }

    fn latch_failed(&mut self) {
        if self.status == Status::Successful {
            self.status = Status::Failed;
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "outcome_rail",
                reasons = self.reasons.len(),
                "outcome latched to failed"
            );
        }
    }

    /// Returns every reason in insertion order.
    ///
    /// The slice is read-only; `reasons().to_vec()` gives an owned copy that
    /// can be changed without affecting the outcome.
    #[inline]
    pub fn reasons(&self) -> &[Reason] {
        self.reasons.as_slice()
    }

    /// Returns the reasons matching `predicate`, in insertion order.
    pub fn reasons_filtered<P>(&self, mut predicate: P) -> Vec<&Reason>
    where
        P: FnMut(&Reason) -> bool,
    {
        self.reasons.iter().filter(|reason| predicate(*reason)).collect()
    }

    /// Returns the failure reasons, in insertion order.
    pub fn failures(&self) -> Vec<&Failure> {
        self.reasons.iter().filter_map(Reason::as_failure).collect()
    }

    /// Returns the success reasons, in insertion order.
    pub fn successes(&self) -> Vec<&Success> {
        self.reasons.iter().filter_map(Reason::as_success).collect()
    }

    #[inline]
    pub fn has_failures(&self) -> bool {
        self.reasons.iter().any(Reason::is_failure)
    }

    #[inline]
    pub fn reason_count(&self) -> usize {
        self.reasons.len()
    }

    /// Consumes the outcome, returning its reasons.
    #[inline]
    pub fn into_reasons(self) -> ErrorVec<Reason> {
        self.reasons.into_inner()
    }

    /// Consumes the outcome, returning only its failures.
    pub fn into_failures(self) -> ErrorVec<Failure> {
        self.reasons
            .into_iter()
            .filter_map(|reason| match reason {
                Reason::Failure(failure) => Some(failure),
                Reason::Success(_) => None,
            })
            .collect()
    }

    /// Splits the outcome into status, value and reasons.
    ///
    /// The value is `Some` only for a successful outcome that holds one.
    pub fn into_parts(self) -> (Status, Option<T>, ErrorVec<Reason>) {
        let value = match (self.status, self.payload) {
            (Status::Successful, Payload::Value(value)) => Some(value),
            _ => None,
        };
        (self.status, value, self.reasons.into_inner())
    }
}

impl<T> fmt::Display for Outcome<T> {
    /// `failed: a; b` in plain form. `{:#}` lists each reason on its own line
    /// with nested causes indented.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.status, f)?;

        if f.alternate() {
            for reason in self.reasons.iter() {
                match reason {
                    Reason::Success(success) => write!(f, "\n- {success}")?,
                    Reason::Failure(failure) => {
                        for (depth, node) in failure.iter_tree() {
                            write!(f, "\n{:indent$}- {node}", "", indent = depth * 2)?;
                        }
                    }
                }
            }
            return Ok(());
        }

        for (i, reason) in self.reasons.iter().enumerate() {
            f.write_str(if i == 0 { ": " } else { "; " })?;
            write!(f, "{reason}")?;
        }
        Ok(())
    }
}
