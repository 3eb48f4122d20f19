use std::env;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::CommandLineSpecification;
use crate::combinator::{ParseState, Parser, Success};
use crate::parser::{collect, grammar, CommandLineNode, ConsoleInterface, ParseFailure, UserInterface};
use crate::prelude::ConfigurationSink;
use crate::tokens::{tokenize, Token};

/// The configured command line parser.
/// Built once from a [`CommandLineSpecification`], after which it may parse any number of command lines.
///
/// ### Example
/// ```
/// # use argtree_core as argtree;
/// use argtree::{CommandLineParser, CommandLineSpecification, FlagSpecification};
/// use std::collections::HashMap;
///
/// let specification = CommandLineSpecification::new()
///     .flag(FlagSpecification::valued("Output", "output", Some('o')).unwrap())
///     .unwrap()
///     .argument("Input")
///     .unwrap();
/// let parser = CommandLineParser::new(&specification);
/// let mut configuration: HashMap<String, String> = HashMap::default();
///
/// parser
///     .configure(&["-o", "out.txt", "in.txt"], &mut configuration)
///     .unwrap();
///
/// assert_eq!(configuration["Output"], "out.txt");
/// assert_eq!(configuration["Input"], "in.txt");
/// ```
#[derive(Debug, Clone)]
pub struct CommandLineParser {
    parser: Parser<CommandLineNode>,
}

impl CommandLineParser {
    /// Build the parser for `specification`.
    pub fn new(specification: &CommandLineSpecification) -> Self {
        Self {
            parser: grammar::command_line(specification),
        }
    }

    /// Run the command line parser against the input tokens.
    ///
    /// Succeeds with every interpretation of the tokens which consumed all of them (up to an optional `--`).
    /// Otherwise, fails with the diagnostics explaining why no interpretation was found.
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<ParseOutcome, ParseFailure> {
        let state = ParseState::new(tokenize(tokens));
        let (successes, failures) = self.parser.parse(&state).into_parts();

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Parsed {} tokens: {} successes, {} failures.",
                tokens.len(),
                successes.len(),
                failures.len()
            );
        }

        if successes.is_empty() {
            return Err(ParseFailure::new(tokens, &failures));
        }

        let remaining = match successes[0].state.consumed().last() {
            Some(Token::Sentinel { origin }) => tokens[origin.argument() + 1..]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            _ => Vec::default(),
        };

        Ok(ParseOutcome {
            trees: successes
                .into_iter()
                .map(|Success { value, .. }| value)
                .collect(),
            remaining,
        })
    }

    /// Parse the input tokens and write the resulting `(key, value)` pairs to `sink`.
    ///
    /// When the command line is ambiguous, the pairs of every interpretation are written in turn.
    /// Later values for the same key will overwrite earlier ones (depending on the `sink`).
    pub fn configure(
        &self,
        tokens: &[&str],
        sink: &mut impl ConfigurationSink,
    ) -> Result<(), ParseFailure> {
        let outcome = self.parse_tokens(tokens)?;

        #[cfg(feature = "tracing_debug")]
        {
            if outcome.is_ambiguous() {
                debug!(
                    "Applying {} ambiguous interpretations in order.",
                    outcome.trees().len()
                );
            }
        }

        outcome.apply(sink);
        Ok(())
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Run the command line parser against the input tokens, reporting any failure to `user_interface`.
    /// Fails with the exit code that [`CommandLineParser::parse`] would exit with.
    ///
    /// ### Example
    /// ```
    /// # use argtree_core as argtree;
    /// use argtree::{CommandLineParser, CommandLineSpecification, ConsoleInterface};
    ///
    /// let parser = CommandLineParser::new(&CommandLineSpecification::new().argument("Name").unwrap());
    ///
    /// assert!(parser.parse_tokens_reporting(&["x"], &ConsoleInterface::default()).is_ok());
    /// assert_eq!(parser.parse_tokens_reporting(&[], &ConsoleInterface::default()), Err(1));
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn parse_tokens_reporting(
        &self,
        tokens: &[&str],
        user_interface: &dyn UserInterface,
    ) -> Result<ParseOutcome, i32> {
        self.invoke(tokens, user_interface)
    }

    fn invoke(
        &self,
        tokens: &[&str],
        user_interface: &(impl UserInterface + ?Sized),
    ) -> Result<ParseOutcome, i32> {
        self.parse_tokens(tokens).map_err(|failure| {
            failure.report(user_interface);
            1
        })
    }

    /// Run the command line parser against the Cli [`env::args`].
    ///
    /// If the command line cannot be parsed, the diagnostics are printed and the program exits with error code `1` (via `std::process::exit`).
    pub fn parse(&self) -> ParseOutcome {
        let command_input: Vec<String> = env::args().skip(1).collect();

        match self.invoke(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
            &ConsoleInterface::default(),
        ) {
            Ok(outcome) => outcome,
            Err(exit_code) => std::process::exit(exit_code),
        }
    }
}

/// The successful result of parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    trees: Vec<CommandLineNode>,
    remaining: Vec<String>,
}

impl ParseOutcome {
    /// Every interpretation of the command line, in the order they were found.
    /// There is always at least one.
    pub fn trees(&self) -> &[CommandLineNode] {
        &self.trees
    }

    /// The raw arguments following the `--` sentinel, if any.
    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }

    /// Whether the command line had more than one interpretation.
    pub fn is_ambiguous(&self) -> bool {
        self.trees.len() > 1
    }

    /// The `(key, value)` pairs of every interpretation, in order.
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.trees.iter().flat_map(collect).collect()
    }

    /// Write the [`pairs`](Self::pairs) to `sink`.
    pub fn apply(&self, sink: &mut impl ConfigurationSink) {
        for (key, value) in self.pairs() {
            sink.set(key, value);
        }
    }
}
