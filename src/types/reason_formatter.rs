//! Cause tree formatting utilities.

use crate::types::alloc_type::String;
use crate::types::Failure;
use core::fmt::{Display, Write};

/// Trait for customizing how a failure and its nested causes are rendered.
///
/// The tree arrives in pre-order as `(depth, failure)` pairs; the root has
/// depth `0`.
pub trait ReasonFormatter {
    fn format_item(&self, item: &dyn Display) -> String {
        let mut rendered = String::new();
        let _ = write!(rendered, "{item}");
        rendered
    }

    fn separator(&self) -> &str {
        " -> "
    }

    /// Repeated once per level of depth before an item.
    fn indent(&self) -> &str {
        ""
    }

    /// Written after the indentation of every nested cause.
    fn cause_prefix(&self) -> Option<&str> {
        None
    }

    fn format_tree<'a>(&self, tree: impl Iterator<Item = (usize, &'a Failure)>) -> String {
        let mut result = String::new();
        for (i, (depth, failure)) in tree.enumerate() {
            if i > 0 {
                result.push_str(self.separator());
            }
            for _ in 0..depth {
                result.push_str(self.indent());
            }
            if depth > 0 {
                if let Some(prefix) = self.cause_prefix() {
                    result.push_str(prefix);
                }
            }
            result.push_str(&self.format_item(failure));
        }
        result
    }
}

/// Configuration-based formatter.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Failure, FailureTrace, ReasonFormatConfig};
///
/// let failure = Failure::new("sync failed")
///     .with_cause(Failure::new("upload failed").with_cause(Failure::new("timeout")));
///
/// assert_eq!(failure.cause_chain(), "sync failed -> upload failed -> timeout");
/// assert_eq!(
///     failure.cause_chain_with(ReasonFormatConfig::cascaded()),
///     "sync failed\n  upload failed\n    timeout"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasonFormatConfig {
    pub separator: String,
    pub indent: String,
    pub cause_prefix: Option<String>,
}

impl Default for ReasonFormatConfig {
    fn default() -> Self {
        Self {
            separator: " -> ".into(),
            indent: String::new(),
            cause_prefix: None,
        }
    }
}

impl ReasonFormatConfig {
    /// One failure per line, indented by depth.
    #[inline]
    pub fn cascaded() -> Self {
        Self {
            separator: "\n".into(),
            indent: "  ".into(),
            ..Default::default()
        }
    }

    /// Like [`cascaded`](Self::cascaded), with a marker in front of each cause.
    #[inline]
    pub fn pretty() -> Self {
        Self {
            cause_prefix: Some("└─ ".into()),
            ..Self::cascaded()
        }
    }

    #[inline]
    pub fn compact() -> Self {
        Self {
            separator: " | ".into(),
            ..Default::default()
        }
    }
}

impl ReasonFormatter for ReasonFormatConfig {
    fn separator(&self) -> &str {
        &self.separator
    }

    fn indent(&self) -> &str {
        &self.indent
    }

    fn cause_prefix(&self) -> Option<&str> {
        self.cause_prefix.as_deref()
    }
}
