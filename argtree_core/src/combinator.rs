//! A small parser combinator library over [`Token`](crate::Token) streams.
//!
//! Parsers return *every* successful interpretation of the input, rather than the first.
//! Failures are only reported when no interpretation succeeded.
mod core;
mod result;
mod state;

pub use self::core::*;
pub use result::*;
pub use state::*;
