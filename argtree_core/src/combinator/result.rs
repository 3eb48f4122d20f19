use crate::combinator::ParseState;

/// One successful interpretation: the parsed value and the state left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Success<T> {
    /// The parsed value.
    pub value: T,
    /// The state following the parsed tokens.
    pub state: ParseState,
}

impl<T> Success<T> {
    /// Pair a value with the state following it.
    pub fn new(value: T, state: ParseState) -> Self {
        Self { value, state }
    }
}

/// A reason the input could not be parsed, and the state at which that was determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Description of what was expected.
    pub message: String,
    /// The state at the point of failure.
    pub state: ParseState,
}

impl Failure {
    /// Pair a message with the state it occurred at.
    pub fn new(message: impl Into<String>, state: ParseState) -> Self {
        Self {
            message: message.into(),
            state,
        }
    }
}

/// The outcome of running a parser.
///
/// Holds every success; failures are only retained when there are no successes at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult<T> {
    successes: Vec<Success<T>>,
    failures: Vec<Failure>,
}

impl<T> ParseResult<T> {
    /// Combine successes and failures, discarding the failures if anything succeeded.
    pub fn new(successes: Vec<Success<T>>, failures: Vec<Failure>) -> Self {
        if successes.is_empty() {
            Self {
                successes,
                failures,
            }
        } else {
            Self {
                successes,
                failures: Vec::default(),
            }
        }
    }

    /// A single success.
    pub fn success(value: T, state: ParseState) -> Self {
        Self::new(vec![Success::new(value, state)], Vec::default())
    }

    /// A single failure.
    pub fn failure(message: impl Into<String>, state: ParseState) -> Self {
        Self::new(Vec::default(), vec![Failure::new(message, state)])
    }

    /// Whether at least one interpretation succeeded.
    pub fn is_success(&self) -> bool {
        !self.successes.is_empty()
    }

    /// Every successful interpretation, in the order they were found.
    pub fn successes(&self) -> &[Success<T>] {
        &self.successes
    }

    /// Every failure, empty whenever there is a success.
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Split into the successes and failures.
    pub fn into_parts(self) -> (Vec<Success<T>>, Vec<Failure>) {
        (self.successes, self.failures)
    }

    /// Transform the value of every success.
    pub fn map<U>(self, f: impl Fn(T) -> U) -> ParseResult<U> {
        ParseResult {
            successes: self
                .successes
                .into_iter()
                .map(|Success { value, state }| Success::new(f(value), state))
                .collect(),
            failures: self.failures,
        }
    }
}
