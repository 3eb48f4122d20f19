//! Core module for `argtree`.
//! See [documentation root](https://docs.rs/argtree/latest/argtree/index.html) for full details.
#![deny(missing_docs)]
mod api;
pub mod combinator;
mod constant;
mod model;
mod parser;
pub mod prelude;
mod tokens;

pub use api::*;
pub use model::*;
pub use parser::grammar;
pub use parser::{
    collect, ArgumentNode, Body, CommandLineNode, CommandLineParser, ConsoleInterface, Diagnostic,
    ErrorContext, FlagNode, ParseFailure, ParseOutcome, UserInterface, VerbNode,
};
pub use tokens::{tokenize, Origin, Token, TokenKind};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {
            assert!(
                $base.contains($sub),
                "'{b}' does not contain '{s}'",
                b = $base,
                s = $sub,
            );
        };
    }

    pub(crate) use assert_contains;
}
