use std::rc::Rc;

use crate::tokens::{Token, TokenKind};

/// The immutable position of a parse within a token sequence.
///
/// All states derived from the same input share its tokens, so cloning is cheap and backtracking is free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseState {
    tokens: Rc<[Token]>,
    position: usize,
}

impl ParseState {
    /// Create the initial state over `tokens`.
    pub fn new(tokens: impl Into<Rc<[Token]>>) -> Self {
        Self {
            tokens: tokens.into(),
            position: 0,
        }
    }

    /// The number of tokens consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether every token has been consumed.
    pub fn is_empty(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// The tokens not yet consumed.
    pub fn remaining(&self) -> &[Token] {
        &self.tokens[self.position.min(self.tokens.len())..]
    }

    /// The tokens already consumed.
    pub fn consumed(&self) -> &[Token] {
        &self.tokens[..self.position.min(self.tokens.len())]
    }

    /// The next token, without consuming it.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Consume the next token when it is of `kind` and satisfies `predicate`.
    ///
    /// On a match, returns the token along with the state following it.
    /// Otherwise returns `None`; `self` remains the current state.
    pub fn accept(
        &self,
        kind: TokenKind,
        predicate: impl Fn(&Token) -> bool,
    ) -> Option<(Token, ParseState)> {
        match self.peek() {
            Some(token) if token.kind() == kind && predicate(token) => Some((
                token.clone(),
                ParseState {
                    tokens: Rc::clone(&self.tokens),
                    position: self.position + 1,
                },
            )),
            _ => None,
        }
    }
}
