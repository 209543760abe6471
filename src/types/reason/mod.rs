//! Reasons explaining why an [`Outcome`](crate::Outcome) ended up where it is.
//!
//! The variant set is closed: a reason is either a [`Success`] note or a
//! [`Failure`] trace, and a failure is either a [`DefaultFailure`] (plain
//! message) or an [`ExceptionalFailure`] (wrapped error). Filtering an outcome
//! by variant is therefore an exhaustive match.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{DefaultFailure, Message, Reason, Success};
//!
//! let reasons = vec![
//!     Reason::from(Success::new("schema loaded")),
//!     Reason::from(DefaultFailure::new("row 12 rejected")),
//! ];
//!
//! assert!(reasons[0].is_success());
//! assert!(reasons[1].is_failure());
//! assert_eq!(reasons[1].message(), "row 12 rejected");
//! ```

use crate::traits::Message;
use crate::types::alloc_type::{Cow, String};
use core::fmt;

mod failure;

pub use failure::{DefaultFailure, ExceptionalFailure, Failure, TreeIter};

/// A message-bearing fact explaining an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    /// A positive note.
    Success(Success),
    /// An error trace, possibly with nested causes.
    Failure(Failure),
}

impl Reason {
    /// Returns `true` if this reason is a success note.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this reason is a failure of any kind.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` if this reason wraps a native error.
    #[inline]
    pub fn is_exceptional_failure(&self) -> bool {
        matches!(self, Self::Failure(Failure::Exceptional(_)))
    }

    #[inline]
    pub fn as_success(&self) -> Option<&Success> {
        match self {
            Self::Success(success) => Some(success),
            Self::Failure(_) => None,
        }
    }

    #[inline]
    pub fn as_failure(&self) -> Option<&Failure> {
        match self {
            Self::Failure(failure) => Some(failure),
            Self::Success(_) => None,
        }
    }
}

impl Message for Reason {
    fn message(&self) -> Cow<'_, str> {
        match self {
            Self::Success(success) => success.message(),
            Self::Failure(failure) => failure.message(),
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(success) => fmt::Display::fmt(success, f),
            Self::Failure(failure) => fmt::Display::fmt(failure, f),
        }
    }
}

impl From<Success> for Reason {
    #[inline]
    fn from(success: Success) -> Self {
        Self::Success(success)
    }
}

impl From<Failure> for Reason {
    #[inline]
    fn from(failure: Failure) -> Self {
        Self::Failure(failure)
    }
}

impl From<DefaultFailure> for Reason {
    #[inline]
    fn from(failure: DefaultFailure) -> Self {
        Self::Failure(failure.into())
    }
}

impl From<ExceptionalFailure> for Reason {
    #[inline]
    fn from(failure: ExceptionalFailure) -> Self {
        Self::Failure(failure.into())
    }
}

/// A success note: a trimmed message and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Success {
    message: String,
}

impl Success {
    /// Creates a success note. Surrounding whitespace is trimmed.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: trimmed(message.into()),
        }
    }
}

impl Message for Success {
    #[inline]
    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.message)
    }
}

impl fmt::Display for Success {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<&str> for Success {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Success {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Strips surrounding whitespace, reusing the allocation when there is none.
pub(crate) fn trimmed(message: String) -> String {
    let trimmed = message.trim();
    if trimmed.len() == message.len() {
        message
    } else {
        String::from(trimmed)
    }
}
