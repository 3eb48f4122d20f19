use crate::parser::{Diagnostic, ErrorContext};

/// Where parse failures are reported to.
pub trait UserInterface {
    /// Print one diagnostic.
    fn print_error(&self, diagnostic: &Diagnostic);
    /// Print where in the command line the diagnostic occurred.
    fn print_error_context(&self, error_context: &ErrorContext);
}

/// Reports to the console, on stderr.
#[derive(Debug, Default)]
pub struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print_error(&self, diagnostic: &Diagnostic) {
        eprintln!("{diagnostic}");
    }

    fn print_error_context(&self, error_context: &ErrorContext) {
        eprintln!("{error_context}");
    }
}
