//! Extension trait for lifting `Result` values into [`Outcome`]s.
//!
//! This module provides [`ResultExt`], which turns a plain `Result` into an
//! outcome without verbose `match` blocks, optionally describing the failed
//! step on top of the native error.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::ResultExt;
//! use outcome_rail::Outcome;
//!
//! fn load_config() -> Outcome<String> {
//!     std::fs::read_to_string("missing-config.toml")
//!         .or_failure_message("loading configuration file")
//! }
//!
//! assert!(load_config().is_failed());
//! ```

use crate::traits::FailureTrace;
use crate::types::alloc_type::String;
use crate::types::{DefaultFailure, ExceptionalFailure, Outcome};
use core::error::Error;

/// Extension trait converting `Result<T, E>` into `Outcome<T>`.
///
/// `Ok(value)` becomes a successful outcome holding `value`. `Err(error)`
/// becomes a failed outcome whose failure wraps `error`.
///
/// # Examples
///
/// ## Plain conversion
///
/// ```
/// use outcome_rail::traits::ResultExt;
///
/// let parsed = "17".parse::<u8>().into_outcome();
/// assert_eq!(parsed.value(), Ok(&17));
///
/// let parsed = "seventeen".parse::<u8>().into_outcome();
/// assert!(parsed.failures()[0].is_exceptional());
/// ```
///
/// ## Lazy description (only built on failure)
///
/// ```
/// use outcome_rail::traits::ResultExt;
/// use outcome_rail::{FailureTrace, Message};
///
/// let port = "http".parse::<u16>().or_failure_with(|| format!("parsing port of {}", "db"));
/// let failure = port.failures()[0];
///
/// assert_eq!(failure.message(), "parsing port of db");
/// assert!(failure.reasons()[0].is_exceptional());
/// ```
pub trait ResultExt<T, E> {
    /// Converts into an outcome, wrapping the error as an exceptional failure.
    fn into_outcome(self) -> Outcome<T>;

    /// Like [`into_outcome`](ResultExt::into_outcome), but the recorded
    /// failure carries `message` and is caused by the wrapped error.
    fn or_failure_message<S: Into<String>>(self, message: S) -> Outcome<T>;

    /// Lazy form of [`or_failure_message`](ResultExt::or_failure_message):
    /// `f` runs only on `Err`.
    fn or_failure_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn into_outcome(self) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::successful().with_value(value),
            Err(error) => Outcome::failed().with_exceptional_failure(error),
        }
    }

    #[inline]
    fn or_failure_message<S: Into<String>>(self, message: S) -> Outcome<T> {
        self.or_failure_with(|| message.into())
    }

    #[inline]
    fn or_failure_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce() -> String,
    {
        match self {
            Ok(value) => Outcome::successful().with_value(value),
            Err(error) => Outcome::failed()
                .with_failure(DefaultFailure::new(f()).with_cause(ExceptionalFailure::new(error))),
        }
    }
}
