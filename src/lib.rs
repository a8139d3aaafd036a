//! Responsive media query generation from named breakpoint scales.
//!
//! `respond` lets stylesheet-generating code write `above("sm")` instead of
//! hand-writing `@media (min-width: 576px)` at every call site. A [`Scale`]
//! maps symbolic breakpoint names to viewport widths; a [`Resolver`] turns
//! those names into conditionally emitted [`MediaBlock`]s.
//!
//! # Quick start
//!
//! ```rust
//! use respond::respond_above;
//!
//! let block = respond_above("sm", || ".sidebar { display: block; }".to_string()).unwrap();
//! assert_eq!(
//!     block.to_string(),
//!     "@media (min-width: 576px) {\n  .sidebar { display: block; }\n}"
//! );
//! ```
//!
//! # Unknown names never fail the build
//!
//! A name missing from the scale is an authoring mistake worth flagging, but
//! it must not stop unrelated generation. Resolution therefore degrades: the
//! block is suppressed, a [`Diagnostic`] goes to the resolver's reporter, and
//! processing continues.
//!
//! ```rust
//! use respond::Resolver;
//!
//! let resolver = Resolver::new();
//! // Emits "warning: Invalid breakpoint: tablet" on stderr, returns None.
//! assert!(resolver.above("tablet", || String::new()).is_none());
//! ```
//!
//! # Custom scales
//!
//! The scale is injected configuration, not a global: substitute a different
//! table wholesale rather than mutating one in place.
//!
//! ```rust
//! use respond::{Resolver, Scale};
//!
//! let scale = Scale::new().add("narrow", 0).add("wide", 1024);
//! let resolver = Resolver::with_scale(scale).unwrap();
//! let block = resolver.between("narrow", "wide", || "p { margin: 0; }".to_string()).unwrap();
//! assert_eq!(block.condition(), "(min-width: 0px) and (max-width: 1023px)");
//! ```

pub mod media;
pub mod query;
pub mod report;
pub mod resolver;
pub mod scale;

pub use media::MediaBlock;
pub use query::{Diagnostic, Guard, Query, Resolution, Role};
pub use report::{collecting_reporter, console_reporter, Reporter};
pub use resolver::Resolver;
pub use scale::{Scale, ScaleEntry, ScaleValidationError};

/// Emits a block for viewports at or above `name`, using the standard scale.
///
/// Convenience wrapper over [`Resolver::above`] with [`Scale::standard`] and
/// the console reporter. Returns `None` (and warns on stderr) for names the
/// standard scale does not define.
pub fn respond_above<F: FnOnce() -> String>(name: &str, content: F) -> Option<MediaBlock> {
    Resolver::new().above(name, content)
}

/// Emits a block for viewports strictly below `name`, using the standard scale.
///
/// See [`Resolver::below`] for the boundary arithmetic.
pub fn respond_below<F: FnOnce() -> String>(name: &str, content: F) -> Option<MediaBlock> {
    Resolver::new().below(name, content)
}

/// Emits a block for viewports between `lower` and `upper`, using the standard scale.
///
/// See [`Resolver::between`] for the boundary arithmetic and the per-side
/// diagnostic policy.
pub fn respond_between<F: FnOnce() -> String>(
    lower: &str,
    upper: &str,
    content: F,
) -> Option<MediaBlock> {
    Resolver::new().between(lower, upper, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_respond_above_standard_scale() {
        let block = respond_above("md", || "body { padding: 2rem; }".to_string()).unwrap();
        assert_eq!(block.condition(), "(min-width: 768px)");
    }

    #[test]
    fn test_respond_below_standard_scale() {
        let block = respond_below("md", || String::new()).unwrap();
        assert_eq!(block.condition(), "(max-width: 767px)");
    }

    #[test]
    fn test_respond_between_standard_scale() {
        let block = respond_between("md", "xl", || String::new()).unwrap();
        assert_eq!(block.condition(), "(min-width: 768px) and (max-width: 1199px)");
    }

    #[test]
    fn test_respond_above_unknown_name() {
        assert!(respond_above("huge", || String::new()).is_none());
    }
}
