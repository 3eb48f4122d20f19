use std::rc::Rc;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::combinator::{ParseResult, ParseState, Success};
use crate::constant::NO_ALTERNATIVE;

type ParseFn<T> = dyn Fn(&ParseState) -> ParseResult<T>;

/// A parser of `T`: a pure function from a [`ParseState`] to a [`ParseResult<T>`].
///
/// Parsers are cheap to clone; clones share the same underlying function.
pub struct Parser<T> {
    run: Rc<ParseFn<T>>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<T> std::fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser{..}").finish()
    }
}

impl<T: 'static> Parser<T> {
    /// Wrap a parse function.
    pub fn new(run: impl Fn(&ParseState) -> ParseResult<T> + 'static) -> Self {
        Self { run: Rc::new(run) }
    }

    /// Run this parser against `state`.
    pub fn parse(&self, state: &ParseState) -> ParseResult<T> {
        (self.run)(state)
    }

    /// A parser which always fails with `message`, consuming nothing.
    pub fn fail(message: impl Into<String>) -> Self {
        let message = message.into();
        Parser::new(move |state| ParseResult::failure(message.clone(), state.clone()))
    }

    /// Alternation: run both `self` and `other` against the same state.
    ///
    /// Every success from either side is kept (in order: `self` then `other`).
    /// Failures from both sides are only reported when neither side succeeded.
    pub fn or(self, other: Parser<T>) -> Parser<T> {
        Parser::new(move |state| {
            let (mut successes, mut failures) = self.parse(state).into_parts();
            let (other_successes, other_failures) = other.parse(state).into_parts();
            successes.extend(other_successes);
            failures.extend(other_failures);
            ParseResult::new(successes, failures)
        })
    }

    /// Transform the value of every success.
    ///
    /// Panics raised by `f` are not caught; they indicate a programming error, not a parse failure.
    pub fn map<U: 'static>(self, f: impl Fn(T) -> U + 'static) -> Parser<U> {
        Parser::new(move |state| self.parse(state).map(&f))
    }

    /// Sequencing: for each success of `self`, run the parser produced by `next` from where that success left off.
    pub fn bind<U: 'static>(self, next: impl Fn(T) -> Parser<U> + 'static) -> Parser<U> {
        Parser::new(move |state| {
            let (successes, failures) = self.parse(state).into_parts();
            let mut next_successes = Vec::default();
            let mut next_failures = failures;

            for Success { value, state } in successes {
                let (s, f) = next(value).parse(&state).into_parts();
                next_successes.extend(s);
                next_failures.extend(f);
            }

            ParseResult::new(next_successes, next_failures)
        })
    }

    /// Sequencing with a projection: equivalent to `bind` followed by `map`, without the nested closure per step.
    ///
    /// `project` receives the value of `self` along with each value of the subsequent parser.
    pub fn bind_map<U: 'static, V: 'static>(
        self,
        next: impl Fn(&T) -> Parser<U> + 'static,
        project: impl Fn(&T, U) -> V + 'static,
    ) -> Parser<V> {
        Parser::new(move |state| {
            let (successes, failures) = self.parse(state).into_parts();
            let mut next_successes = Vec::default();
            let mut next_failures = failures;

            for Success { value, state } in successes {
                let (s, f) = next(&value).parse(&state).into_parts();
                next_successes.extend(
                    s.into_iter()
                        .map(|Success { value: v, state }| Success::new(project(&value, v), state)),
                );
                next_failures.extend(f);
            }

            ParseResult::new(next_successes, next_failures)
        })
    }

    /// Parse `self` then `right`, pairing their values.
    pub fn and<U: 'static>(self, right: Parser<U>) -> Parser<(T, U)>
    where
        T: Clone,
    {
        self.bind_map(move |_| right.clone(), |left, right| (left.clone(), right))
    }
}

impl<T: Clone + 'static> Parser<T> {
    /// A parser which always succeeds with `value`, consuming nothing.
    pub fn succeed(value: T) -> Self {
        Parser::new(move |state| ParseResult::success(value.clone(), state.clone()))
    }
}

impl<T: Clone + 'static> Parser<Vec<T>> {
    /// Parse `self` then `item`, appending the value of `item` to the list.
    pub fn cons(self, item: Parser<T>) -> Parser<Vec<T>> {
        self.bind_map(
            move |_| item.clone(),
            |values, value| {
                let mut values = values.clone();
                values.push(value);
                values
            },
        )
    }
}

/// Alternation across all `parsers`.
///
/// Always fails with "No successful alternative" (alongside any failures of `parsers`) when nothing succeeds.
pub fn any<T: 'static>(parsers: impl IntoIterator<Item = Parser<T>>) -> Parser<T> {
    parsers
        .into_iter()
        .fold(Parser::fail(NO_ALTERNATIVE), |alternatives, parser| {
            alternatives.or(parser)
        })
}

/// Parse each of `parsers` exactly once, in order, collecting their values.
pub fn all<T: Clone + 'static>(parsers: impl IntoIterator<Item = Parser<T>>) -> Parser<Vec<T>> {
    parsers
        .into_iter()
        .fold(Parser::succeed(Vec::default()), |sequence, parser| {
            sequence.cons(parser)
        })
}

/// Repeat `parser` for as long as it keeps succeeding.
///
/// Each round extends every current success by one more `parser` match.
/// When a round produces nothing new, the previous round is the result; this always succeeds.
/// A match which does not consume any tokens ends the repetition for that branch.
pub fn zero_or_more<T: Clone + 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    Parser::new(move |state| {
        let mut accumulated = vec![Success::new(Vec::default(), state.clone())];

        loop {
            let mut next = Vec::default();

            for Success { value, state } in &accumulated {
                for step in parser.parse(state).into_parts().0 {
                    if step.state.position() <= state.position() {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!(
                                "Repetition did not advance past position {}.  Stopping this branch.",
                                state.position()
                            );
                        }

                        continue;
                    }

                    let mut values = value.clone();
                    values.push(step.value);
                    next.push(Success::new(values, step.state));
                }
            }

            if next.is_empty() {
                return ParseResult::new(accumulated, Vec::default());
            }

            accumulated = next;
        }
    })
}

/// Optionally parse `parser`.
///
/// Both the match (a single item list) and the non-match (an empty list) are successes.
pub fn zero_or_one<T: Clone + 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    parser
        .map(|value| vec![value])
        .or(Parser::succeed(Vec::default()))
}
