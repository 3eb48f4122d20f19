use regex::Regex;
use std::sync::{Arc, LazyLock};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::constant::SENTINEL;
use crate::tokens::model::*;

// Priority order: short flags, long flag, key=value, sentinel, bare argument.
static SHORT_FLAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-([\p{L}\p{N}]+)$").expect("static regex must compile"));
static SHORT_FLAG_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{N}]$").expect("static regex must compile"));
static LONG_FLAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:/|--)(\w[\w-]*(?::\w[\w-]*)*)$").expect("static regex must compile")
});
static KEY_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(\w[\w-]*(?::\w[\w-]*)*)=(.*)$").expect("static regex must compile")
});
static LONG_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\w[\w-]*(?::\w[\w-]*)*$").expect("static regex must compile")
});

/// Split the raw command line arguments into tokens.
///
/// Tokens from successive arguments are concatenated in argument order.
///
/// ### Example
/// ```
/// # use argtree_core as argtree;
/// use argtree::{tokenize, TokenKind};
///
/// let tokens = tokenize(&["-ab", "key=value", "--", "rest"]);
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind()).collect();
///
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::ShortFlag,
///         TokenKind::ShortFlag,
///         TokenKind::LongFlag,
///         TokenKind::Argument,
///         TokenKind::Sentinel,
///         TokenKind::Argument,
///     ]
/// );
/// ```
pub fn tokenize<S: AsRef<str>>(arguments: &[S]) -> Vec<Token> {
    let tokens: Vec<Token> = arguments
        .iter()
        .enumerate()
        .flat_map(|(index, argument)| tokenize_argument(index, argument.as_ref()))
        .collect();

    #[cfg(feature = "tracing_debug")]
    {
        debug!(
            "Tokenized {} arguments into {} tokens.",
            arguments.len(),
            tokens.len()
        );
    }

    tokens
}

fn tokenize_argument(argument: usize, text: &str) -> Vec<Token> {
    let origin = Origin::new(argument, Arc::<str>::from(text));

    if let Some(captures) = SHORT_FLAGS.captures(text) {
        let flags = captures
            .get(1)
            .expect("internal error - short flags must capture the flag characters");
        flags
            .as_str()
            .char_indices()
            .map(|(index, _)| Token::ShortFlag {
                origin: origin.clone(),
                index: flags.start() + index,
            })
            .collect()
    } else if let Some(captures) = LONG_FLAG.captures(text) {
        let key = captures
            .get(1)
            .expect("internal error - long flag must capture the key");
        vec![Token::LongFlag {
            origin,
            range: key.range(),
        }]
    } else if let Some(captures) = KEY_VALUE.captures(text) {
        let key = captures
            .get(1)
            .expect("internal error - key=value must capture the key");
        let value = captures
            .get(2)
            .expect("internal error - key=value must capture the value");
        vec![
            Token::LongFlag {
                origin: origin.clone(),
                range: key.range(),
            },
            Token::Argument {
                origin,
                start: value.start(),
            },
        ]
    } else if text == SENTINEL {
        vec![Token::Sentinel { origin }]
    } else {
        vec![Token::Argument { origin, start: 0 }]
    }
}

/// Whether `name` would be produced as the key of a [`Token::LongFlag`].
pub(crate) fn is_long_key(name: &str) -> bool {
    LONG_KEY.is_match(name)
}

/// Whether `name` would be produced as the flag of a [`Token::ShortFlag`].
pub(crate) fn is_short_flag(name: char) -> bool {
    SHORT_FLAG_NAME.is_match(name.encode_utf8(&mut [0; 4]))
}
