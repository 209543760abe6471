//! Contract violations raised by the [`Outcome`](crate::Outcome) API itself.
//!
//! These are misuse signals (reading a value that is not there, handing in a list
//! with holes), not domain failures. Domain failures belong in
//! [`Failure`](crate::Failure) reasons.

use core::fmt;

/// Error returned when the outcome API is used outside its contract.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, OutcomeError};
///
/// let outcome: Outcome<i32> = Outcome::failed();
/// assert_eq!(outcome.value(), Err(OutcomeError::ReadWhileFailed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeError {
    /// A required argument was absent. The payload names the argument.
    MissingArgument(&'static str),
    /// The value was read while the outcome is in the failed state.
    ReadWhileFailed,
    /// The value was read from an outcome created without a payload.
    ReadFromNoValue,
    /// A successful outcome was requested with an empty value.
    EmptyValue,
}

impl OutcomeError {
    /// Returns `true` for the two value-access errors.
    #[inline]
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::ReadWhileFailed | Self::ReadFromNoValue)
    }
}

impl fmt::Display for OutcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArgument(what) => write!(f, "{what} must be defined"),
            Self::ReadWhileFailed => f.write_str("cannot read value while in failed state"),
            Self::ReadFromNoValue => f.write_str("cannot read value from a no-value outcome"),
            Self::EmptyValue => f.write_str(
                "value must be defined; use `Outcome<NoValue>` and `with_no_value()` instead",
            ),
        }
    }
}

impl core::error::Error for OutcomeError {}
