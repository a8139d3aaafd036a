//! The diagnostic side channel.
//!
//! Resolution never fails hard on an unknown breakpoint; it reports through
//! a [`Reporter`] callback instead. The default reporter writes a styled
//! warning line to stderr; [`collecting_reporter`] captures diagnostics into
//! a shared vector for inspection (useful in tests or for batching warnings
//! at the end of a generation run).

use std::sync::{Arc, Mutex};

use console::Style;

use crate::query::Diagnostic;

/// Callback invoked once per diagnostic as resolution produces it.
pub type Reporter = Box<dyn Fn(&Diagnostic) + Send + Sync>;

/// Returns the default reporter: `warning: <diagnostic>` on stderr, with the
/// prefix styled the same way terminal warnings usually are.
pub fn console_reporter() -> Reporter {
    let prefix = Style::new().yellow().bold();
    Box::new(move |diagnostic| {
        eprintln!("{} {}", prefix.apply_to("warning:"), diagnostic);
    })
}

/// Returns a reporter that appends every diagnostic to `sink`.
///
/// # Example
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use respond::{collecting_reporter, Resolver};
///
/// let sink = Arc::new(Mutex::new(Vec::new()));
/// let resolver = Resolver::new().reporter(collecting_reporter(sink.clone()));
///
/// resolver.above("bogus", || String::new());
/// assert_eq!(sink.lock().unwrap().len(), 1);
/// ```
pub fn collecting_reporter(sink: Arc<Mutex<Vec<Diagnostic>>>) -> Reporter {
    Box::new(move |diagnostic| {
        sink.lock().unwrap().push(diagnostic.clone());
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Role;

    #[test]
    fn test_collecting_reporter_captures_in_order() {
        let sink = Arc::new(Mutex::new(Vec::new()));
        let reporter = collecting_reporter(sink.clone());

        reporter(&Diagnostic::unknown("foo", Role::Lower));
        reporter(&Diagnostic::unknown("bar", Role::Upper));

        let captured = sink.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].to_string(), "Invalid lower breakpoint: foo");
        assert_eq!(captured[1].to_string(), "Invalid upper breakpoint: bar");
    }

    #[test]
    fn test_console_reporter_constructs() {
        // Writes to stderr; just exercise the call path.
        let reporter = console_reporter();
        reporter(&Diagnostic::unknown("foo", Role::Sole));
    }
}
