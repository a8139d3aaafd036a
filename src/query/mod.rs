//! Query intents and their resolution against a scale.
//!
//! A [`Query`] is the ephemeral "gate this content by width" request built at
//! each call site. Resolving one against a [`Scale`](crate::Scale) is a pure
//! function yielding a [`Resolution`]: at most one numeric [`Guard`] plus any
//! [`Diagnostic`]s for names the scale does not define.

mod diagnostic;
mod query;

pub use diagnostic::{Diagnostic, Role};
pub use query::{Guard, Query, Resolution};
