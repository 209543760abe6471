//! Nested cause handling shared by every failure variant.
//!
//! A failure owns the failures that led to it. Causes are attached by value,
//! so a failure can never become its own ancestor and the cause graph stays a
//! tree.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{DefaultFailure, FailureTrace};
//!
//! let mut failure = DefaultFailure::new("config rejected");
//! failure
//!     .caused_by(DefaultFailure::new("missing key `port`"))
//!     .caused_by(DefaultFailure::new("unknown key `prot`"));
//!
//! assert_eq!(failure.reasons().len(), 2);
//! ```

use crate::types::accumulator::Accumulator;
use crate::types::alloc_type::Vec;
use crate::types::{Failure, OutcomeError};

/// Operations over the owned list of nested causes of a failure.
///
/// `reasons()` exposes the owned list directly rather than a copy; use
/// `reasons_mut()` for in-place edits.
pub trait FailureTrace {
    /// Returns the nested causes in insertion order.
    fn reasons(&self) -> &[Failure];

    /// Returns the owned cause list for in-place edits.
    fn reasons_mut(&mut self) -> &mut Vec<Failure>;

    /// Appends a single cause.
    #[inline]
    fn caused_by<F>(&mut self, failure: F) -> &mut Self
    where
        F: Into<Failure>,
    {
        self.reasons_mut().push(failure.into());
        self
    }

    /// Appends every cause yielded by `failures`, preserving order.
    #[inline]
    fn caused_by_all<I>(&mut self, failures: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Failure>,
    {
        self.reasons_mut()
            .extend(failures.into_iter().map(Into::into));
        self
    }

    /// Appends every cause, or none at all when any entry is absent.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::MissingArgument`] if an entry is `None`. The
    /// cause list is left untouched in that case.
    fn try_caused_by_all<I, F>(&mut self, failures: I) -> Result<&mut Self, OutcomeError>
    where
        I: IntoIterator<Item = Option<F>>,
        F: Into<Failure>,
    {
        let staged: Accumulator<Failure> = Accumulator::try_from_present(failures, "failure")?;
        self.reasons_mut().extend(staged);
        Ok(self)
    }

    /// Consuming form of [`caused_by`](FailureTrace::caused_by) for builder chains.
    #[inline]
    fn with_cause<F>(mut self, failure: F) -> Self
    where
        Self: Sized,
        F: Into<Failure>,
    {
        self.caused_by(failure);
        self
    }

    /// Consuming form of [`caused_by_all`](FailureTrace::caused_by_all).
    #[inline]
    fn with_causes<I>(mut self, failures: I) -> Self
    where
        Self: Sized,
        I: IntoIterator,
        I::Item: Into<Failure>,
    {
        self.caused_by_all(failures);
        self
    }
}
