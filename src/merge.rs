//! Work-block-preserving merge for text documents.
//!
//! A document may contain a single block delimited by literal start/end
//! marker lines (e.g. the work-specific section of `.zshrc`). When a new
//! document is synced over an existing one, the block the user edited
//! locally is extracted first and re-injected into the incoming document,
//! so repeated syncs never discard local edits between the markers.

use std::ops::Range;

/// Default start marker for the work-specific `.zshrc` section.
pub const WORK_CONFIG_START: &str = "# WORK-SPECIFIC CONFIG START";

/// Default end marker for the work-specific `.zshrc` section.
pub const WORK_CONFIG_END: &str = "# WORK-SPECIFIC CONFIG END";

/// A pair of literal marker strings delimiting a preserved block.
///
/// Only the first `start … end` pair in a document is ever located; nested
/// or repeated pairs are unsupported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: WORK_CONFIG_START.to_string(),
            end: WORK_CONFIG_END.to_string(),
        }
    }
}

impl Markers {
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Byte span of the first block: first occurrence of the start marker
    /// through the first occurrence of the end marker after it, inclusive
    /// of both markers. Content between them may span any number of lines.
    fn span(&self, document: &str) -> Option<Range<usize>> {
        let start = document.find(&self.start)?;
        let after_start = start + self.start.len();
        let end_rel = document[after_start..].find(&self.end)?;
        let end = after_start + end_rel + self.end.len();
        Some(start..end)
    }

    /// Extract the first marker-delimited block from `document`, markers
    /// included. Returns `None` when no complete pair exists.
    #[must_use]
    pub fn extract<'a>(&self, document: &'a str) -> Option<&'a str> {
        self.span(document).map(|span| &document[span])
    }

    /// Combine an incoming document with a previously extracted block.
    ///
    /// - No block, or the block already appears verbatim in `incoming`:
    ///   the incoming document is returned unchanged (idempotent).
    /// - `incoming` has its own marker pair: that span is replaced with
    ///   the preserved block, surrounding text untouched.
    /// - Otherwise the block is appended after a blank line.
    #[must_use]
    pub fn merge(&self, incoming: &str, block: Option<&str>) -> String {
        let Some(block) = block else {
            return incoming.to_string();
        };
        if incoming.contains(block) {
            return incoming.to_string();
        }
        if let Some(span) = self.span(incoming) {
            let mut merged = String::with_capacity(incoming.len() + block.len());
            merged.push_str(&incoming[..span.start]);
            merged.push_str(block);
            merged.push_str(&incoming[span.end..]);
            merged
        } else {
            format!("{incoming}\n\n{block}")
        }
    }
}
