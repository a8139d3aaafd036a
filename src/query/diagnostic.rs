//! Non-fatal resolution diagnostics.

/// Which argument position an invalid name occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The single name of an `above` or `below` query.
    Sole,
    /// The lower bound of a `between` query.
    Lower,
    /// The upper bound of a `between` query.
    Upper,
}

/// A warning produced while resolving a query.
///
/// Diagnostics are deliberately not errors: an unknown breakpoint suppresses
/// its own block and is reported, but never stops unrelated generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A requested name has no entry in the scale.
    UnknownBreakpoint { name: String, role: Role },
    /// A `between` pair whose lower threshold does not precede its upper one.
    DegenerateRange { lower: String, upper: String },
}

impl Diagnostic {
    pub(crate) fn unknown(name: &str, role: Role) -> Self {
        Diagnostic::UnknownBreakpoint {
            name: name.to_string(),
            role,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::UnknownBreakpoint { name, role } => match role {
                Role::Sole => write!(f, "Invalid breakpoint: {}", name),
                Role::Lower => write!(f, "Invalid lower breakpoint: {}", name),
                Role::Upper => write!(f, "Invalid upper breakpoint: {}", name),
            },
            Diagnostic::DegenerateRange { lower, upper } => {
                write!(
                    f,
                    "Degenerate range: '{}' does not start below '{}'",
                    lower, upper
                )
            }
        }
    }
}
