//! Breakpoint scales: ordered name-to-width tables.
//!
//! This module provides the configuration side of the crate:
//!
//! - [`Scale`]: an ordered table of named viewport-width thresholds
//! - [`ScaleEntry`]: a single named threshold
//! - [`ScaleValidationError`]: errors from scale validation
//!
//! Scales are immutable configuration values. They are built once (fluently,
//! or deserialized from config) and read many times; callers substitute a
//! whole different scale rather than mutating one in place.

mod error;
mod scale;

pub use error::ScaleValidationError;
pub use scale::{Scale, ScaleEntry};
