//! Scale validation errors.

/// Error returned when scale validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaleValidationError {
    /// An entry's width is smaller than the entry before it.
    NonMonotonic {
        name: String,
        width: u32,
        prev_name: String,
        prev_width: u32,
    },
    /// The same breakpoint name appears more than once.
    DuplicateName { name: String },
}

impl std::fmt::Display for ScaleValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaleValidationError::NonMonotonic {
                name,
                width,
                prev_name,
                prev_width,
            } => {
                write!(
                    f,
                    "breakpoint '{}' ({}) is narrower than preceding '{}' ({})",
                    name, width, prev_name, prev_width
                )
            }
            ScaleValidationError::DuplicateName { name } => {
                write!(f, "breakpoint '{}' is defined more than once", name)
            }
        }
    }
}

impl std::error::Error for ScaleValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_monotonic_error_display() {
        let err = ScaleValidationError::NonMonotonic {
            name: "md".to_string(),
            width: 500,
            prev_name: "sm".to_string(),
            prev_width: 576,
        };
        let msg = err.to_string();
        assert!(msg.contains("md"));
        assert!(msg.contains("500"));
        assert!(msg.contains("sm"));
        assert!(msg.contains("576"));
    }

    #[test]
    fn test_duplicate_name_error_display() {
        let err = ScaleValidationError::DuplicateName {
            name: "lg".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("lg"));
        assert!(msg.contains("more than once"));
    }
}
