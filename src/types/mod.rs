//! Outcome and reason types.
//!
//! This module provides the [`Outcome`] container together with the closed
//! family of reasons it records.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{DefaultFailure, FailureTrace, NoValue, Outcome};
//!
//! let outcome: Outcome<NoValue> = Outcome::successful()
//!     .with_no_value()
//!     .with_success_message("connected")
//!     .with_failure(DefaultFailure::new("query failed").with_cause(DefaultFailure::new("timeout")));
//!
//! println!("{outcome:#}");
//! // Output:
//! // failed
//! // - connected
//! // - query failed
//! //   - timeout
//! ```
use smallvec::SmallVec;

pub(crate) mod accumulator;
pub mod alloc_type;
pub mod no_value;
pub mod outcome;
pub mod outcome_error;
pub mod reason;
pub mod reason_formatter;

pub use no_value::NoValue;
pub use outcome::{Outcome, Status, Successful};
pub use outcome_error::OutcomeError;
pub use reason::*;
pub use reason_formatter::{ReasonFormatConfig, ReasonFormatter};

/// SmallVec-backed collection used for accumulating reasons.
///
/// Uses inline storage for up to 1 element to avoid heap allocations in the
/// common case of a single reason.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
