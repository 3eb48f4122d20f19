//! `argtree` is a combinator based command line parser for Rust.
//!
//! Rather than binding command line values onto program variables, `argtree` flattens the command line into hierarchical `(key, value)` pairs.
//! These are suitable for loading into a configuration system (ex: a `HashMap`), alongside other sources such as files or the environment.
//! Specifically, `argtree` attempts to prioritize the following design concerns:
//! * *Verb paradigm*:
//! Commands nest via *verbs* (ex: `remote add origin <url>`), each with its own flags and arguments.
//! The verb path is preserved in the configuration keys (ex: `Remote:Add:Name`).
//! * *Validated grammar*:
//! A command line specification is checked as it is built, so a malformed grammar never reaches the parser.
//! * *Every interpretation*:
//! The parser explores all alternatives, rather than committing to the first match.
//! Ambiguous grammars produce more than one interpretation, all of which are reported.
//! * *Detailed yet basic UX*:
//! Parse failures point at the offending token in the command line.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/configure.rs")]
//! ```
//!
//! ```console
//! $ configure -v remote add origin https://example.com/repo
//! Remote:Add:Name = origin
//! Remote:Add:Url = https://example.com/repo
//! Verbose = True
//!
//! $ configure directory=/tmp fetch upstream mirror -- --depth 1
//! Directory = /tmp
//! Fetch:Remotes = mirror
//! (passed through: --depth 1)
//!
//! $ configure remote
//! Remote = True
//!
//! $ configure remote add origin
//! Parse error: Unexpected token 'add'. (at 'add')
//! remote add origin
//!        ^
//! Parse error: Unexpected token 'remote'. (at 'remote')
//! remote add origin
//! ^
//! ```
//!
//! # Specification
//! Configure `argtree` by building a [`CommandLineSpecification`].
//! Each builder method validates its input, returning a [`SpecificationError`] when the grammar would be malformed.
//!
//! A specification carries any number of *flags*, followed by *either* verbs *or* arguments (or neither):
//! * [`FlagSpecification`]: a flag matched via `--long`, `/long`, `long=value`, or `-s`.
//! A [`FlagKind::Switch`] produces a fixed value (`"True"` by default).
//! A [`FlagKind::Valued`] consumes the following argument as its value.
//! Flags may appear in any order, any number of times.
//! * [`VerbSpecification`]: a named sub-command with its own nested specification.
//! At most one verb is matched per specification.
//! * Arguments: positional values, matched in order.
//! A multi-argument (which matches zero or more values) may only be the final argument.
//!
//! Names are compared case insensitively by default (see [`NameComparison`]).
//! Short flags (ex: `-v`) are always case sensitive.
//!
//! ### Tokens
//! The raw arguments are split into tokens before parsing (see [`tokenize`]):
//!
//! ```text
//! Raw            | Tokens
//! ---------------|----------------------------------------
//! -ab            | ShortFlag(a) ShortFlag(b)
//! --key, /key    | LongFlag(key)
//! key=value      | LongFlag(key) Argument(value)
//! --             | Sentinel
//! anything else  | Argument(anything else)
//! ```
//!
//! The sentinel `--` ends the parse.
//! Everything after it is passed through untouched (see [`ParseOutcome::remaining`]).
//!
//! ### Configuration keys
//! The parse tree is flattened via [`collect`]:
//! * Flags and arguments produce `(name, value)`, prefixed by the path of the verbs leading to them.
//! * A verb matched by itself (without flags, a sub-verb, or arguments) produces `(path, "True")`.
//! * The values of a multi-argument share the same key; a configuration sink keeps the last.
//!
//! The pairs may be written to any [`ConfigurationSink`](./prelude/trait.ConfigurationSink.html).
//! `argtree` provides implementations for `Vec<(String, String)>`, `HashMap<String, String>`, and `BTreeMap<String, String>`.
//!
//! # Ambiguity
//! When flags share a short name, or a grammar otherwise admits more than one reading of the command line, each reading is a separate parse tree.
//! [`CommandLineParser::configure`] writes the pairs of every tree in turn, so later trees overwrite earlier ones for the same key.
//!
//! ```no_run
#![doc = include_str!("../demos/ambiguous.rs")]
//! ```
//!
//! ```console
//! $ ambiguous -x a.tar
//! 2 interpretation(s)
//! #0:
//!   Extract = True
//!   Files = a.tar
//! #1:
//!   Exclude = True
//!   Files = a.tar
//! ```
//!
//! # Combinators
//! The [`grammar`] parsers are built from the general purpose parser combinators in [`combinator`].
//! These may also be used directly, to recognize custom token sequences.
//!
//! # Features
//! * `unit_test`: For features that help with unit testing.
//! * `tracing_debug`: Emit `tracing` debug events while tokenizing and parsing.
pub use argtree_core::*;
