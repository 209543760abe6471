//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`failure!`], [`success!`]
//! - **Types**: [`Outcome`], [`NoValue`], [`Reason`], [`Failure`], [`DefaultFailure`],
//!   [`ExceptionalFailure`], [`Success`], [`OutcomeError`]
//! - **Traits**: [`Message`], [`FailureTrace`], [`ResultExt`]
//!
//! # Examples
//!
//! ## 30-Second Quick Start
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn remove_user(id: u64) -> Outcome<NoValue> {
//!     if id == 0 {
//!         return Outcome::failed().with_failure(failure!("user {id} is reserved"));
//!     }
//!     Outcome::successful()
//!         .with_no_value()
//!         .with_success(success!("user {id} removed"))
//! }
//!
//! assert!(remove_user(0).is_failed());
//! assert_eq!(remove_user(9).successes()[0].message(), "user 9 removed");
//! ```

// Macros
pub use crate::{failure, success};

// Core types
pub use crate::types::{
    DefaultFailure, ExceptionalFailure, Failure, NoValue, Outcome, OutcomeError, Reason, Success,
};

// Traits
pub use crate::traits::{FailureTrace, Message, ResultExt};
