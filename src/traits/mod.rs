//! Core traits shared by outcomes and reasons.
//!
//! - [`Message`]: the message capability every reason has
//! - [`FailureTrace`]: nested cause handling for failures
//! - [`ResultExt`]: lifting `Result` values into outcomes
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{FailureTrace, Message};
//! use outcome_rail::Failure;
//!
//! let mut failure = Failure::new("  import aborted  ");
//! failure.caused_by(Failure::new("row 3: bad date"));
//!
//! assert_eq!(failure.message(), "import aborted");
//! assert_eq!(failure.reasons()[0].message(), "row 3: bad date");
//! ```

pub mod failure_trace;
pub mod message;
pub mod result_ext;

pub use failure_trace::FailureTrace;
pub use message::Message;
pub use result_ext::ResultExt;
