use thiserror::Error;

use crate::combinator::Failure;
use crate::parser::{ErrorContext, UserInterface};

/// One reason the command line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    message: String,
    token: Option<String>,
    context: ErrorContext,
}

impl Diagnostic {
    fn new(arguments: &[impl AsRef<str>], failure: &Failure) -> Self {
        match failure.state.peek() {
            Some(token) => Self {
                message: failure.message.clone(),
                token: Some(token.to_string()),
                context: ErrorContext::at(arguments, token),
            },
            None => Self {
                message: failure.message.clone(),
                token: None,
                context: ErrorContext::end(arguments),
            },
        }
    }

    /// What was expected.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The token the parse stopped at, or `None` when it ran out of input.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The command line, marked at the point of failure.
    pub fn context(&self) -> &ErrorContext {
        &self.context
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.token {
            Some(token) => write!(f, "Parse error: {} (at '{token}')", self.message),
            None => write!(f, "Parse error: {} (at end of input)", self.message),
        }
    }
}

/// The command line matched no interpretation of the specification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parse error: {}", summarize(.diagnostics))]
pub struct ParseFailure {
    diagnostics: Vec<Diagnostic>,
}

fn summarize(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(Diagnostic::message)
        .collect::<Vec<&str>>()
        .join(" ")
}

impl ParseFailure {
    /// Explain the `failures` in terms of the raw `arguments`.
    ///
    /// Failures are de-duplicated and ordered so that those which got furthest into the input come first.
    pub(crate) fn new(arguments: &[impl AsRef<str>], failures: &[Failure]) -> Self {
        let mut unique: Vec<&Failure> = Vec::default();

        for failure in failures {
            if !unique.iter().any(|f| {
                f.message == failure.message && f.state.position() == failure.state.position()
            }) {
                unique.push(failure);
            }
        }

        unique.sort_by(|a, b| b.state.position().cmp(&a.state.position()));

        Self {
            diagnostics: unique
                .into_iter()
                .map(|failure| Diagnostic::new(arguments, failure))
                .collect(),
        }
    }

    /// Each reason the parse failed, furthest into the input first.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Print each diagnostic along with its error context.
    pub fn report(&self, user_interface: &(impl UserInterface + ?Sized)) {
        for diagnostic in &self.diagnostics {
            user_interface.print_error(diagnostic);
            user_interface.print_error_context(diagnostic.context());
        }
    }
}
