//! The breakpoint table and its builder API.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::error::ScaleValidationError;

/// A single named threshold in a [`Scale`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleEntry {
    /// The symbolic breakpoint name, e.g. `"sm"`.
    pub name: String,
    /// The viewport width the name maps to, in the scale's unit.
    pub width: u32,
}

/// An ordered breakpoint table mapping symbolic names to viewport widths.
///
/// Entries are kept in insertion order and are expected to be monotonically
/// non-decreasing in width; [`Scale::validate`] checks that invariant. All
/// widths share one length unit (`"px"` unless overridden).
///
/// # Example
///
/// ```rust
/// use respond::Scale;
///
/// let scale = Scale::new()
///     .add("phone", 0)
///     .add("tablet", 600)
///     .add("desktop", 1024);
///
/// assert_eq!(scale.width_of("tablet"), Some(600));
/// assert!(scale.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    entries: Vec<ScaleEntry>,
    #[serde(default = "default_unit")]
    unit: String,
}

fn default_unit() -> String {
    "px".to_string()
}

static STANDARD: Lazy<Scale> = Lazy::new(|| {
    Scale::new()
        .add("xs", 0)
        .add("sm", 576)
        .add("md", 768)
        .add("lg", 992)
        .add("xl", 1200)
        .add("xxl", 1400)
});

impl Scale {
    /// Creates an empty scale with the default `"px"` unit.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            unit: default_unit(),
        }
    }

    /// Returns the standard six-step scale:
    /// `xs=0, sm=576, md=768, lg=992, xl=1200, xxl=1400`.
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    /// Adds a named threshold, returning an updated scale for chaining.
    ///
    /// Re-adding an existing name replaces its width in place, preserving
    /// the original position in the ordering.
    pub fn add(mut self, name: &str, width: u32) -> Self {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) {
            entry.width = width;
        } else {
            self.entries.push(ScaleEntry {
                name: name.to_string(),
                width,
            });
        }
        self
    }

    /// Sets the length unit used when rendering conditions, e.g. `"em"`.
    pub fn unit(mut self, unit: &str) -> Self {
        self.unit = unit.to_string();
        self
    }

    /// Looks up the width associated with `name`.
    ///
    /// Boundary arithmetic needs the numeric threshold, so resolution goes
    /// through this accessor rather than a bare membership test.
    pub fn width_of(&self, name: &str) -> Option<u32> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.width)
    }

    /// Returns true if `name` is defined in this scale.
    pub fn has(&self, name: &str) -> bool {
        self.width_of(name).is_some()
    }

    /// The length unit shared by all entries.
    pub fn unit_label(&self) -> &str {
        &self.unit
    }

    /// Returns the entries in order.
    pub fn entries(&self) -> &[ScaleEntry] {
        &self.entries
    }

    /// Returns an iterator over the breakpoint names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Number of breakpoints in the scale.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the scale has no breakpoints.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validates the scale invariants: unique names and widths that never
    /// decrease along the insertion order.
    ///
    /// The builder API cannot produce duplicates, but deserialized scales
    /// can, so both invariants are checked here.
    pub fn validate(&self) -> Result<(), ScaleValidationError> {
        for (i, entry) in self.entries.iter().enumerate() {
            if self.entries[..i].iter().any(|e| e.name == entry.name) {
                return Err(ScaleValidationError::DuplicateName {
                    name: entry.name.clone(),
                });
            }
            if let Some(prev) = i.checked_sub(1).map(|p| &self.entries[p]) {
                if entry.width < prev.width {
                    return Err(ScaleValidationError::NonMonotonic {
                        name: entry.name.clone(),
                        width: entry.width,
                        prev_name: prev.name.clone(),
                        prev_width: prev.width,
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for Scale {
    /// The standard scale, not an empty one: a resolver built with
    /// `Default` is immediately usable.
    fn default() -> Self {
        Self::standard()
    }
}
