//! Ergonomic macros for building reasons from format strings.
//!
//! - [`macro@crate::failure`] - Builds a [`DefaultFailure`](crate::DefaultFailure)
//!   with a formatted message.
//! - [`macro@crate::success`] - Builds a [`Success`](crate::Success) with a
//!   formatted message.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{failure, success, Message, NoValue, Outcome};
//!
//! let row = 12;
//! let outcome: Outcome<NoValue> = Outcome::successful()
//!     .with_no_value()
//!     .with_success(success!("{} rows parsed", row - 1))
//!     .with_failure(failure!("row {row}: unknown currency"));
//!
//! assert_eq!(outcome.failures()[0].message(), "row 12: unknown currency");
//! assert_eq!(outcome.successes()[0].message(), "11 rows parsed");
//! ```

/// Creates a [`DefaultFailure`](crate::DefaultFailure) from a format string.
///
/// # Arguments
///
/// Accepts the same arguments as the standard `format!` macro.
///
/// # Examples
///
/// ```
/// use outcome_rail::{failure, Message};
///
/// let id = 7;
/// assert_eq!(failure!("job {} timed out", id).message(), "job 7 timed out");
/// ```
#[macro_export]
macro_rules! failure {
    ($($arg:tt)*) => {
        $crate::DefaultFailure::new($crate::__private::format!($($arg)*))
    };
}

/// Creates a [`Success`](crate::Success) from a format string.
///
/// # Arguments
///
/// Accepts the same arguments as the standard `format!` macro.
///
/// # Examples
///
/// ```
/// use outcome_rail::{success, Message};
///
/// assert_eq!(success!("{} files synced", 3).message(), "3 files synced");
/// ```
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::Success::new($crate::__private::format!($($arg)*))
    };
}
