//! Generated media-query blocks.

use std::fmt;

use crate::query::Guard;

/// A conditionally emitted `@media` block.
///
/// Holds the resolved [`Guard`], the scale's length unit, and the body text
/// produced by the caller's content closure. `Display` renders the block:
///
/// ```text
/// @media (min-width: 576px) {
///   .sidebar { display: block; }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaBlock {
    guard: Guard,
    unit: String,
    body: String,
}

impl MediaBlock {
    pub(crate) fn new(guard: Guard, unit: &str, body: String) -> Self {
        Self {
            guard,
            unit: unit.to_string(),
            body,
        }
    }

    /// The numeric condition gating this block.
    pub fn guard(&self) -> Guard {
        self.guard
    }

    /// The body text supplied by the content closure, unmodified.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The rendered condition, e.g. `(min-width: 576px)`.
    pub fn condition(&self) -> String {
        self.guard.condition(&self.unit)
    }
}

impl fmt::Display for MediaBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@media {} {{", self.condition())?;
        for line in self.body.lines() {
            if line.is_empty() {
                writeln!(f)?;
            } else {
                writeln!(f, "  {}", line)?;
            }
        }
        write!(f, "}}")
    }
}
