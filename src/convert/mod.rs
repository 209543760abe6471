//! Conversion helpers between `Result` and [`Outcome`].
//!
//! These adapters make it straightforward to adopt outcomes incrementally:
//! wrap results coming from existing APIs, and flatten outcomes back into
//! results where an external API expects one.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//!
//! let result: Result<i32, std::num::ParseIntError> = "42".parse();
//! let outcome = result_to_outcome(result);
//! assert!(outcome.is_successful());
//!
//! let flattened = outcome_to_result(outcome);
//! assert_eq!(flattened.map_err(|failures| failures.len()), Ok(Some(42)));
//! ```

use crate::types::{ErrorVec, Failure, Outcome, Status};
use core::error::Error;

/// Converts a `Result` into an `Outcome`.
///
/// # Arguments
///
/// * `result` - The result to convert
///
/// # Returns
///
/// * a successful outcome holding the value if `result` is `Ok`
/// * a failed outcome with one exceptional failure wrapping the error otherwise
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
/// use std::io;
///
/// let err: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::Other, "boom"));
/// let outcome = result_to_outcome(err);
///
/// assert!(outcome.is_failed());
/// assert!(outcome.reasons()[0].is_exceptional_failure());
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T>
where
    E: Error + Send + Sync + 'static,
{
    match result {
        Ok(value) => Outcome::successful().with_value(value),
        Err(error) => Outcome::failed().with_exceptional_failure(error),
    }
}

/// Flattens an `Outcome` into a `Result`.
///
/// # Arguments
///
/// * `outcome` - The outcome to flatten
///
/// # Returns
///
/// * `Ok(Some(value))` for a successful outcome holding a value
/// * `Ok(None)` for a successful outcome built without one
/// * `Err(failures)` for a failed outcome; success notes are dropped
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::{NoValue, Outcome};
///
/// let done: Outcome<NoValue> = Outcome::successful().with_no_value();
/// assert!(matches!(outcome_to_result(done), Ok(None)));
///
/// let failed: Outcome<u8> = Outcome::failed().with_failure_message("bad input");
/// assert_eq!(outcome_to_result(failed).unwrap_err().len(), 1);
/// ```
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<Option<T>, ErrorVec<Failure>> {
    if outcome.is_failed() {
        return Err(outcome.into_failures());
    }
    let (status, value, _) = outcome.into_parts();
    debug_assert_eq!(status, Status::Successful);
    Ok(value)
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        result_to_outcome(result)
    }
}
