//! Width queries and the pure resolution routine.

use crate::scale::Scale;

use super::diagnostic::{Diagnostic, Role};

/// A width constraint request against one or two named breakpoints.
///
/// Queries are created per call site and consumed immediately; they hold the
/// requested names, not resolved values, so the same query can be resolved
/// against different scales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Viewports at or above the named threshold.
    Above(String),
    /// Viewports strictly below the named threshold.
    Below(String),
    /// Viewports from the lower threshold up to just under the upper one.
    Between(String, String),
}

impl Query {
    /// Shorthand for [`Query::Above`].
    pub fn above(name: &str) -> Self {
        Query::Above(name.to_string())
    }

    /// Shorthand for [`Query::Below`].
    pub fn below(name: &str) -> Self {
        Query::Below(name.to_string())
    }

    /// Shorthand for [`Query::Between`].
    pub fn between(lower: &str, upper: &str) -> Self {
        Query::Between(lower.to_string(), upper.to_string())
    }

    /// Resolves this query against a scale.
    ///
    /// This is a pure function of (scale, names): identical inputs always
    /// produce an identical [`Resolution`]. Unknown names yield diagnostics
    /// instead of a guard; a `Between` query checks and reports each side
    /// independently, so a single call can surface two diagnostics.
    pub fn resolve(&self, scale: &Scale) -> Resolution {
        match self {
            Query::Above(name) => match scale.width_of(name) {
                Some(v) => Resolution::guarded(Guard::AtLeast(v)),
                None => Resolution::diagnostic(Diagnostic::unknown(name, Role::Sole)),
            },
            Query::Below(name) => match scale.width_of(name) {
                // One unit under the threshold keeps below(n) and above(n)
                // from overlapping. A zero-width threshold saturates at 0.
                Some(v) => Resolution::guarded(Guard::AtMost(v.saturating_sub(1))),
                None => Resolution::diagnostic(Diagnostic::unknown(name, Role::Sole)),
            },
            Query::Between(lower, upper) => {
                let vl = scale.width_of(lower);
                let vu = scale.width_of(upper);

                let mut diagnostics = Vec::new();
                if vl.is_none() {
                    diagnostics.push(Diagnostic::unknown(lower, Role::Lower));
                }
                if vu.is_none() {
                    diagnostics.push(Diagnostic::unknown(upper, Role::Upper));
                }

                match (vl, vu) {
                    (Some(vl), Some(vu)) => {
                        // No reordering: a reversed pair keeps its vacuous
                        // condition and gets flagged instead.
                        if vl >= vu {
                            diagnostics.push(Diagnostic::DegenerateRange {
                                lower: lower.clone(),
                                upper: upper.clone(),
                            });
                        }
                        Resolution {
                            guard: Some(Guard::Within {
                                min: vl,
                                max: vu.saturating_sub(1),
                            }),
                            diagnostics,
                        }
                    }
                    _ => Resolution {
                        guard: None,
                        diagnostics,
                    },
                }
            }
        }
    }
}

/// The numeric width condition a query resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// `width >= min`.
    AtLeast(u32),
    /// `width <= max`.
    AtMost(u32),
    /// `min <= width <= max`.
    Within { min: u32, max: u32 },
}

impl Guard {
    /// The lower bound, if this guard has one.
    pub fn min_width(&self) -> Option<u32> {
        match self {
            Guard::AtLeast(min) | Guard::Within { min, .. } => Some(*min),
            Guard::AtMost(_) => None,
        }
    }

    /// The upper bound, if this guard has one.
    pub fn max_width(&self) -> Option<u32> {
        match self {
            Guard::AtMost(max) | Guard::Within { max, .. } => Some(*max),
            Guard::AtLeast(_) => None,
        }
    }

    /// Returns true if no width can satisfy the guard.
    pub fn is_vacuous(&self) -> bool {
        match self {
            Guard::Within { min, max } => min > max,
            _ => false,
        }
    }

    /// Renders the guard as a media-query condition in the given unit,
    /// e.g. `(min-width: 576px) and (max-width: 1399px)`.
    pub fn condition(&self, unit: &str) -> String {
        match self {
            Guard::AtLeast(min) => format!("(min-width: {}{})", min, unit),
            Guard::AtMost(max) => format!("(max-width: {}{})", max, unit),
            Guard::Within { min, max } => format!(
                "(min-width: {}{}) and (max-width: {}{})",
                min, unit, max, unit
            ),
        }
    }
}

/// Outcome of resolving a [`Query`]: at most one guard, plus any diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The resolved condition, absent when any requested name was unknown.
    pub guard: Option<Guard>,
    /// Warnings collected during resolution, in argument order.
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    fn guarded(guard: Guard) -> Self {
        Self {
            guard: Some(guard),
            diagnostics: Vec::new(),
        }
    }

    fn diagnostic(diagnostic: Diagnostic) -> Self {
        Self {
            guard: None,
            diagnostics: vec![diagnostic],
        }
    }
}
