/// Payload type for outcomes of operations that produce nothing.
///
/// `NoValue` has no variants, so no instance of it can ever exist. An
/// `Outcome<NoValue>` is created through
/// [`Successful::with_no_value`](crate::Successful::with_no_value) and reading
/// its value reports [`OutcomeError::ReadFromNoValue`](crate::OutcomeError::ReadFromNoValue).
///
/// # Examples
///
/// ```
/// use outcome_rail::{NoValue, Outcome, OutcomeError};
///
/// let outcome: Outcome<NoValue> = Outcome::successful().with_no_value();
/// assert!(outcome.is_successful());
/// assert_eq!(outcome.value().unwrap_err(), OutcomeError::ReadFromNoValue);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoValue {}
