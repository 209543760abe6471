use crate::types::{ErrorVec, OutcomeError};

/// Ordered, append-only storage for reasons.
///
/// This struct wraps the underlying storage (currently `ErrorVec`) so the
/// outcome container and the all-or-nothing list mutators share one notion of
/// "accumulate in insertion order".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Accumulator<T> {
    items: ErrorVec<T>,
}

impl<T> Accumulator<T> {
    /// Creates a new empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self {
            items: ErrorVec::new(),
        }
    }

    /// Collects every entry of `iter`, failing if any of them is absent.
    ///
    /// Nothing is kept on failure, which lets callers validate a whole batch
    /// before touching their own state.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::MissingArgument`] carrying `what` when an entry
    /// is `None`.
    pub fn try_from_present<I, U>(iter: I, what: &'static str) -> Result<Self, OutcomeError>
    where
        I: IntoIterator<Item = Option<U>>,
        U: Into<T>,
    {
        iter.into_iter()
            .map(|item| item.map(Into::into).ok_or(OutcomeError::MissingArgument(what)))
            .collect()
    }

    /// Adds a single item to the accumulator.
    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Returns the number of items in the accumulator.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the items as a slice, in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the items.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consumes the accumulator and returns the underlying `ErrorVec`.
    #[inline]
    pub fn into_inner(self) -> ErrorVec<T> {
        self.items
    }
}

impl<T> FromIterator<T> for Accumulator<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Accumulator<T> {
    type Item = T;
    type IntoIter = smallvec::IntoIter<[T; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
