//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Outcome with a Value
//!
//! ```
//! use outcome_rail::{Outcome, OutcomeError};
//!
//! let outcome = Outcome::successful().with_value("ready");
//! assert!(outcome.is_successful());
//! assert_eq!(outcome.value(), Ok(&"ready"));
//!
//! let failed: Outcome<&str> = Outcome::failed();
//! assert_eq!(failed.value(), Err(OutcomeError::ReadWhileFailed));
//! ```
//!
//! ## Reason Trail
//!
//! ```
//! use outcome_rail::{NoValue, Outcome};
//!
//! let outcome: Outcome<NoValue> = Outcome::successful()
//!     .with_no_value()
//!     .with_success_message("3 of 4 mirrors updated")
//!     .with_failure_message("mirror eu-2 unreachable")
//!     .with_success_message("cache purged");
//!
//! assert!(outcome.is_failed());
//! assert_eq!(outcome.reasons().len(), 3);
//! assert_eq!(outcome.failures().len(), 1);
//! assert_eq!(outcome.successes().len(), 2);
//! assert_eq!(outcome.to_string(), "failed: 3 of 4 mirrors updated; mirror eu-2 unreachable; cache purged");
//! ```
//!
//! ## Nested Causes
//!
//! ```
//! use outcome_rail::{ExceptionalFailure, Failure, FailureTrace};
//! use std::io;
//!
//! let failure = Failure::new("backup failed").with_cause(ExceptionalFailure::new(
//!     io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
//! ));
//!
//! assert_eq!(failure.cause_chain(), "backup failed -> permission denied");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Result` and `Outcome`
pub mod convert;
/// Reason-building macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for reasons and outcomes
pub mod traits;
/// Outcome, reason and error types
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

#[doc(hidden)]
pub mod __private {
    pub use alloc::format;
}

pub use convert::*;
pub use traits::*;
pub use types::{
    DefaultFailure, ErrorVec, ExceptionalFailure, Failure, NoValue, Outcome, OutcomeError, Reason,
    ReasonFormatConfig, ReasonFormatter, Status, Success, Successful, TreeIter,
};
