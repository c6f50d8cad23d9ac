use crate::Tokenizer;
use alloc::string::{String, ToString};
use core::{fmt, iter::FusedIterator, ops::Deref, ops::Range};

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                    Token                                     ║
║                                   ¯¯¯¯¯¯¯                                    ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// A single token of a text, along with where it was found.
///
/// `Token` dereferences to `str`, so it can be used wherever the token text
/// is needed.
///
/// ```
/// # use delimit::Tokenizer;
/// let token = Tokenizer::new("  black  white", " ").tokens().nth(1).unwrap();
/// assert_eq!(token, "white");
/// assert_eq!(token.offset(), 9);
/// assert_eq!(token.index(), 1);
/// assert_eq!(token.span(), 9..14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token<'t> {
    value: &'t str,
    offset: usize,
    index: usize,
}

impl<'t> Token<'t> {
    /// The text of the token.
    pub fn as_str(&self) -> &'t str {
        self.value
    }

    /// Byte offset of the token within the tokenized text.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Zero-based position of the token among all tokens of the text.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The half-open byte range of the token within the tokenized text.
    pub fn span(&self) -> Range<usize> {
        self.offset..self.offset + self.value.len()
    }

    /// Length of the token in bytes.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Always `false`: tokens are never empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Converts into an owned copy of the token's text.
    pub fn into_owned(self) -> String {
        self.value.to_string()
    }
}

impl Deref for Token<'_> {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        self.value
    }
}

impl AsRef<str> for Token<'_> {
    fn as_ref(&self) -> &str {
        self.value
    }
}

impl PartialEq<str> for Token<'_> {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for Token<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl PartialEq<Token<'_>> for &str {
    fn eq(&self, other: &Token<'_>) -> bool {
        *self == other.value
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value)
    }
}

impl<'t> From<Token<'t>> for &'t str {
    fn from(token: Token<'t>) -> Self {
        token.value
    }
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                    Tokens                                    ║
║                                   ¯¯¯¯¯¯¯¯                                   ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// An iterator over the [`Token`]s of a [`Tokenizer`].
#[derive(Debug, Clone)]
pub struct Tokens<'t> {
    tokenizer: Tokenizer<'t>,
    sent: usize,
}

impl<'t> Tokens<'t> {
    /// The underlying tokenizer, positioned at the next token to be yielded.
    pub fn tokenizer(&self) -> &Tokenizer<'t> {
        &self.tokenizer
    }
}

impl<'t> Iterator for Tokens<'t> {
    type Item = Token<'t>;
    fn next(&mut self) -> Option<Self::Item> {
        let span = self.tokenizer.span()?;
        let token = Token {
            value: &self.tokenizer.text()[span.clone()],
            offset: span.start,
            index: self.sent,
        };
        self.tokenizer.advance();
        self.sent += 1;
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tokenizer.size_hint()
    }
}

impl FusedIterator for Tokens<'_> {}

impl<'t> From<Tokenizer<'t>> for Tokens<'t> {
    fn from(tokenizer: Tokenizer<'t>) -> Self {
        Self { tokenizer, sent: 0 }
    }
}
