use super::trimmed;
use crate::traits::{FailureTrace, Message};
use crate::types::alloc_type::{Arc, Box, Cow, String, Vec};
use crate::types::reason_formatter::{ReasonFormatConfig, ReasonFormatter};
use core::error::Error;
use core::fmt;

/// An error trace with its own list of nested causes.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Failure, FailureTrace, Message};
///
/// let failure = Failure::new("checkout failed")
///     .with_cause(Failure::new("payment declined"));
///
/// assert_eq!(failure.message(), "checkout failed");
/// assert_eq!(failure.reasons().len(), 1);
/// assert_eq!(failure.cause_chain(), "checkout failed -> payment declined");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// Message-only failure.
    Default(DefaultFailure),
    /// Failure wrapping a native error.
    Exceptional(ExceptionalFailure),
}

impl Failure {
    /// Shorthand for a [`DefaultFailure`] with the given message.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self::Default(DefaultFailure::new(message))
    }

    /// Shorthand for an [`ExceptionalFailure`] wrapping `error`.
    #[inline]
    pub fn exceptional<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Exceptional(ExceptionalFailure::new(error))
    }

    #[inline]
    pub fn is_exceptional(&self) -> bool {
        matches!(self, Self::Exceptional(_))
    }

    #[inline]
    pub fn as_default(&self) -> Option<&DefaultFailure> {
        match self {
            Self::Default(failure) => Some(failure),
            Self::Exceptional(_) => None,
        }
    }

    #[inline]
    pub fn as_exceptional(&self) -> Option<&ExceptionalFailure> {
        match self {
            Self::Exceptional(failure) => Some(failure),
            Self::Default(_) => None,
        }
    }

    /// Walks this failure and every nested cause in pre-order.
    ///
    /// Each item carries its depth; this failure itself is yielded first at
    /// depth `0`.
    #[inline]
    pub fn iter_tree(&self) -> TreeIter<'_> {
        let mut stack = Vec::with_capacity(4);
        stack.push((0, self));
        TreeIter { stack }
    }

    /// Renders the failure and its causes with the default formatter.
    #[must_use]
    pub fn cause_chain(&self) -> String {
        self.cause_chain_with(ReasonFormatConfig::default())
    }

    /// Renders the failure and its causes with a custom formatter.
    #[must_use]
    pub fn cause_chain_with<F: ReasonFormatter>(&self, formatter: F) -> String {
        formatter.format_tree(self.iter_tree())
    }
}

/// Pre-order iterator over a failure tree. See [`Failure::iter_tree`].
#[derive(Debug, Clone)]
pub struct TreeIter<'a> {
    stack: Vec<(usize, &'a Failure)>,
}

impl<'a> Iterator for TreeIter<'a> {
    type Item = (usize, &'a Failure);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, failure) = self.stack.pop()?;
        self.stack
            .extend(failure.reasons().iter().rev().map(|cause| (depth + 1, cause)));
        Some((depth, failure))
    }
}

impl FailureTrace for Failure {
    #[inline]
    fn reasons(&self) -> &[Failure] {
        match self {
            Self::Default(failure) => failure.reasons(),
            Self::Exceptional(failure) => failure.reasons(),
        }
    }

    #[inline]
    fn reasons_mut(&mut self) -> &mut Vec<Failure> {
        match self {
            Self::Default(failure) => failure.reasons_mut(),
            Self::Exceptional(failure) => failure.reasons_mut(),
        }
    }
}

impl Message for Failure {
    fn message(&self) -> Cow<'_, str> {
        match self {
            Self::Default(failure) => failure.message(),
            Self::Exceptional(failure) => failure.message(),
        }
    }
}

impl fmt::Display for Failure {
    /// Plain form prints the message; `{:#}` prints the whole cause tree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return f.write_str(&self.cause_chain_with(ReasonFormatConfig::cascaded()));
        }
        match self {
            Self::Default(failure) => fmt::Display::fmt(failure, f),
            Self::Exceptional(failure) => fmt::Display::fmt(failure, f),
        }
    }
}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Default(failure) => failure.source(),
            Self::Exceptional(failure) => failure.source(),
        }
    }
}

impl From<DefaultFailure> for Failure {
    #[inline]
    fn from(failure: DefaultFailure) -> Self {
        Self::Default(failure)
    }
}

impl From<ExceptionalFailure> for Failure {
    #[inline]
    fn from(failure: ExceptionalFailure) -> Self {
        Self::Exceptional(failure)
    }
}

/// A failure described by a plain, trimmed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultFailure {
    message: String,
    reasons: Vec<Failure>,
}

impl DefaultFailure {
    /// Creates a failure with no causes. Surrounding whitespace is trimmed.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: trimmed(message.into()),
            reasons: Vec::new(),
        }
    }
}

impl FailureTrace for DefaultFailure {
    #[inline]
    fn reasons(&self) -> &[Failure] {
        &self.reasons
    }

    #[inline]
    fn reasons_mut(&mut self) -> &mut Vec<Failure> {
        &mut self.reasons
    }
}

impl Message for DefaultFailure {
    #[inline]
    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.message)
    }
}

impl fmt::Display for DefaultFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for DefaultFailure {
    /// The first nested cause. `source()` is a single chain, so later sibling
    /// causes are not reachable through it; walk them with
    /// [`Failure::iter_tree`] or read [`FailureTrace::reasons`].
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.reasons.first().map(|cause| cause as &(dyn Error + 'static))
    }
}

impl From<&str> for DefaultFailure {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for DefaultFailure {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// A failure that wraps a native error value.
///
/// The message is whatever the error displays, which may be empty. The error
/// itself stays reachable through [`exception`](Self::exception) and
/// [`downcast_ref`](Self::downcast_ref). It is held behind an `Arc`, so cloning
/// the failure shares the wrapped error; equality is identity of that error.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ExceptionalFailure, Message};
/// use std::io;
///
/// let failure = ExceptionalFailure::new(io::Error::new(io::ErrorKind::NotFound, "no such table"));
///
/// assert_eq!(failure.message(), "no such table");
/// assert_eq!(failure.downcast_ref::<io::Error>().map(io::Error::kind), Some(io::ErrorKind::NotFound));
/// ```
#[derive(Debug, Clone)]
pub struct ExceptionalFailure {
    error: Arc<dyn Error + Send + Sync + 'static>,
    reasons: Vec<Failure>,
}

impl ExceptionalFailure {
    /// Wraps `error` without causes.
    #[inline]
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            error: Arc::new(error),
            reasons: Vec::new(),
        }
    }

    /// Wraps an already boxed error.
    #[inline]
    pub fn from_boxed(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self {
            error: Arc::from(error),
            reasons: Vec::new(),
        }
    }

    /// Returns the wrapped error.
    #[inline]
    pub fn exception(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.error
    }

    /// Returns the wrapped error as `E` if that is its concrete type.
    #[inline]
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.error.downcast_ref::<E>()
    }
}

impl PartialEq for ExceptionalFailure {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::addr_eq(Arc::as_ptr(&self.error), Arc::as_ptr(&other.error))
            && self.reasons == other.reasons
    }
}

impl Eq for ExceptionalFailure {}

impl FailureTrace for ExceptionalFailure {
    #[inline]
    fn reasons(&self) -> &[Failure] {
        &self.reasons
    }

    #[inline]
    fn reasons_mut(&mut self) -> &mut Vec<Failure> {
        &mut self.reasons
    }
}

impl Message for ExceptionalFailure {
    fn message(&self) -> Cow<'_, str> {
        use core::fmt::Write;

        let mut rendered = String::new();
        let _ = write!(rendered, "{}", self.error);
        Cow::Owned(rendered)
    }
}

impl fmt::Display for ExceptionalFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl Error for ExceptionalFailure {
    /// The wrapped error, never a nested cause. The causes attached with
    /// [`FailureTrace::caused_by`] are reachable only through
    /// [`Failure::iter_tree`] or [`FailureTrace::reasons`].
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.exception())
    }
}
