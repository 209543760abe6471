use crate::types::alloc_type::Cow;

/// Shared capability of every reason: a human-readable message.
///
/// Default reasons borrow their stored (trimmed) text. Exceptional failures
/// render the wrapped error, so the message may be empty when the error has
/// nothing to say.
///
/// # Examples
///
/// ```
/// use outcome_rail::{DefaultFailure, Message, Success};
///
/// assert_eq!(Success::new("  cache warmed ").message(), "cache warmed");
/// assert_eq!(DefaultFailure::new("disk full").message(), "disk full");
/// ```
pub trait Message {
    /// Returns the message carried by this reason.
    fn message(&self) -> Cow<'_, str>;
}
