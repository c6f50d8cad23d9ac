#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

use core::fmt;

/// Emits a `tracing` event at trace level when the `tracing` feature is
/// enabled; expands to nothing otherwise.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

pub mod prelude;

mod delimiters;
pub use delimiters::Delimiters;
mod tokenizer;
pub use tokenizer::Tokenizer;
mod token;
pub use token::{Token, Tokens};
pub mod diagnostic;
pub use diagnostic::{Diagnose, Report};

#[cfg(test)]
mod arbitrary;

/// Indicates that a token was requested from a [`Tokenizer`] which had no
/// tokens left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExhaustedError {
    /// Byte length of the text the tokenizer ran over, which is where
    /// tokenization ended.
    pub offset: usize,
}

impl ExhaustedError {
    /// Offset at which the tokenizer ran out of tokens.
    /// ```text
    /// "  a  b   "
    ///          ↑
    ///          9
    /// ```
    /// ```
    /// # use delimit::Tokenizer;
    /// let mut tokenizer = Tokenizer::new("  a  b   ", " ");
    /// tokenizer.advance().advance();
    /// assert_eq!(tokenizer.get().unwrap_err().offset(), 9);
    /// ```
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for ExhaustedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tokenizer is exhausted; no token remains at offset {}",
            self.offset
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ExhaustedError {}
