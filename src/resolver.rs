//! The public respond surface.

use crate::media::MediaBlock;
use crate::query::Query;
use crate::report::{console_reporter, Reporter};
use crate::scale::{Scale, ScaleValidationError};

/// Resolves breakpoint names into conditionally emitted media blocks.
///
/// A resolver owns an immutable [`Scale`] injected at construction and a
/// [`Reporter`] for diagnostics. Each operation takes a content closure and
/// invokes it only when its guard resolves, so skipped blocks cost nothing
/// beyond the lookup.
///
/// # Example
///
/// ```rust
/// use respond::Resolver;
///
/// let resolver = Resolver::new();
/// let css = resolver
///     .above("md", || ".grid { columns: 3; }".to_string())
///     .map(|block| block.to_string())
///     .unwrap_or_default();
/// assert!(css.starts_with("@media (min-width: 768px)"));
/// ```
pub struct Resolver {
    scale: Scale,
    reporter: Reporter,
}

impl Resolver {
    /// Creates a resolver over the standard scale with the console reporter.
    pub fn new() -> Self {
        Self {
            scale: Scale::standard(),
            reporter: console_reporter(),
        }
    }

    /// Creates a resolver over a caller-supplied scale.
    ///
    /// # Errors
    ///
    /// Returns an error if the scale violates its invariants (duplicate
    /// names or decreasing widths). A malformed table is a configuration
    /// mistake and is refused up front, unlike per-call unknown names,
    /// which only warn.
    pub fn with_scale(scale: Scale) -> Result<Self, ScaleValidationError> {
        scale.validate()?;
        Ok(Self {
            scale,
            reporter: console_reporter(),
        })
    }

    /// Replaces the diagnostic reporter, returning the resolver for chaining.
    pub fn reporter(mut self, reporter: Reporter) -> Self {
        self.reporter = reporter;
        self
    }

    /// The scale this resolver reads from.
    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    /// Emits a block for viewports at or above `name`.
    ///
    /// With `name` mapped to width `v`, the block is guarded by
    /// `min-width: v`. An unknown name emits no block and reports
    /// `Invalid breakpoint: <name>`.
    pub fn above<F: FnOnce() -> String>(&self, name: &str, content: F) -> Option<MediaBlock> {
        self.emit(Query::above(name), content)
    }

    /// Emits a block for viewports strictly below `name`.
    ///
    /// With `name` mapped to width `v`, the block is guarded by
    /// `max-width: v - 1` (saturating at 0), so `below(n)` and `above(n)`
    /// never overlap. Same unknown-name policy as [`Resolver::above`].
    pub fn below<F: FnOnce() -> String>(&self, name: &str, content: F) -> Option<MediaBlock> {
        self.emit(Query::below(name), content)
    }

    /// Emits a block for viewports between `lower` and `upper`.
    ///
    /// With widths `vl` and `vu`, the block is guarded by `min-width: vl`
    /// and `max-width: vu - 1`. Each side is checked independently: one or
    /// two unknown names suppress the block and report one diagnostic per
    /// invalid side. A reversed or equal pair still emits its (vacuous)
    /// block and additionally reports a degenerate-range warning.
    pub fn between<F: FnOnce() -> String>(
        &self,
        lower: &str,
        upper: &str,
        content: F,
    ) -> Option<MediaBlock> {
        self.emit(Query::between(lower, upper), content)
    }

    fn emit<F: FnOnce() -> String>(&self, query: Query, content: F) -> Option<MediaBlock> {
        let resolution = query.resolve(&self.scale);
        for diagnostic in &resolution.diagnostics {
            (self.reporter)(diagnostic);
        }
        resolution
            .guard
            .map(|guard| MediaBlock::new(guard, self.scale.unit_label(), content()))
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}
