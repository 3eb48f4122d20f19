use std::ops::Range;
use std::sync::Arc;

use crate::constant::SENTINEL;

/// Where a token came from: the raw argument text and its index in the argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    argument: usize,
    text: Arc<str>,
}

impl Origin {
    pub(crate) fn new(argument: usize, text: impl Into<Arc<str>>) -> Self {
        Self {
            argument,
            text: text.into(),
        }
    }

    /// The index of the raw argument within the argument list.
    pub fn argument(&self) -> usize {
        self.argument
    }

    /// The raw argument text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The discriminant of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// See [`Token::ShortFlag`].
    ShortFlag,
    /// See [`Token::LongFlag`].
    LongFlag,
    /// See [`Token::Argument`].
    Argument,
    /// See [`Token::Sentinel`].
    Sentinel,
}

/// A single lexical unit of the command line.
///
/// Tokens keep their originating argument so they can always be rendered back for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// One character flag, such as each of `a` and `b` in `-ab`.
    ShortFlag {
        /// The raw argument this flag came from.
        origin: Origin,
        /// Byte index of the flag character within the raw argument.
        index: usize,
    },
    /// A key name, such as `--option`, `/option`, or the left side of `key=value`.
    LongFlag {
        /// The raw argument this key came from.
        origin: Origin,
        /// Byte range of the key within the raw argument.
        range: Range<usize>,
    },
    /// A bare value, such as `value` or the right side of `key=value`.
    Argument {
        /// The raw argument this value came from.
        origin: Origin,
        /// Byte index at which the value starts; it always runs to the end of the raw argument.
        start: usize,
    },
    /// The literal `--` separator.
    Sentinel {
        /// The raw argument `--`.
        origin: Origin,
    },
}

impl Token {
    /// The discriminant of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::ShortFlag { .. } => TokenKind::ShortFlag,
            Token::LongFlag { .. } => TokenKind::LongFlag,
            Token::Argument { .. } => TokenKind::Argument,
            Token::Sentinel { .. } => TokenKind::Sentinel,
        }
    }

    /// The raw argument this token came from.
    pub fn origin(&self) -> &Origin {
        match self {
            Token::ShortFlag { origin, .. }
            | Token::LongFlag { origin, .. }
            | Token::Argument { origin, .. }
            | Token::Sentinel { origin } => origin,
        }
    }

    /// Byte offset of this token within its raw argument.
    pub fn offset(&self) -> usize {
        match self {
            Token::ShortFlag { index, .. } => *index,
            Token::LongFlag { range, .. } => range.start,
            Token::Argument { start, .. } => *start,
            Token::Sentinel { .. } => 0,
        }
    }

    /// The flag character of a [`Token::ShortFlag`].
    pub fn flag(&self) -> Option<char> {
        match self {
            Token::ShortFlag { origin, index } => origin.text()[*index..].chars().next(),
            _ => None,
        }
    }

    /// The key of a [`Token::LongFlag`].
    pub fn key(&self) -> Option<&str> {
        match self {
            Token::LongFlag { origin, range } => Some(&origin.text()[range.clone()]),
            _ => None,
        }
    }

    /// The value of a [`Token::Argument`].
    pub fn value(&self) -> Option<&str> {
        match self {
            Token::Argument { origin, start } => Some(&origin.text()[*start..]),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::ShortFlag { .. } => write!(f, "-{}", self.flag().unwrap_or_default()),
            Token::LongFlag { .. } => write!(f, "--{}", self.key().unwrap_or_default()),
            Token::Argument { .. } => write!(f, "{}", self.value().unwrap_or_default()),
            Token::Sentinel { .. } => write!(f, "{SENTINEL}"),
        }
    }
}
