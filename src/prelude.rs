//! Exposes the [`Tokenize`] extension trait.
use crate::{Delimiters, Tokenizer};

/// Tokenizes string slices in place.
///
/// ```
/// use delimit::prelude::*;
///
/// let pairing = "12 7 w";
/// let mut tokens = pairing.words();
/// assert_eq!(tokens.next(), Some("12"));
/// assert_eq!(tokens.remainder(), "7 w");
///
/// assert_eq!("a,b;c".tokenize(",;").collect::<Vec<_>>(), ["a", "b", "c"]);
/// ```
pub trait Tokenize {
    /// Creates a [`Tokenizer`] over `self` splitting on `delimiters`.
    fn tokenize(&self, delimiters: impl Into<Delimiters>) -> Tokenizer<'_>;

    /// Creates a [`Tokenizer`] over `self` splitting on the space character.
    fn words(&self) -> Tokenizer<'_> {
        self.tokenize(Delimiters::default())
    }
}

impl Tokenize for str {
    fn tokenize(&self, delimiters: impl Into<Delimiters>) -> Tokenizer<'_> {
        Tokenizer::new(self, delimiters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{string::String, vec::Vec};

    #[test]
    fn tokenize_owned_string() {
        let line = String::from("  XXC white1 ");
        let tokens: Vec<_> = line.tokenize(' ').collect();
        assert_eq!(tokens, ["XXC", "white1"]);
    }

    #[test]
    fn words() {
        assert_eq!("a  b".words().collect::<Vec<_>>(), ["a", "b"]);
        assert!("".words().is_exhausted());
    }
}
