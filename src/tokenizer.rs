use crate::{Delimiters, ExhaustedError, Tokens};
use alloc::string::{String, ToString};
use core::{iter::FusedIterator, ops::Range};

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                  Tokenizer                                   ║
║                                 ¯¯¯¯¯¯¯¯¯¯¯                                  ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// Position of a [`Tokenizer`] within its text.
#[derive(Debug, Clone, Copy)]
enum Cursor {
    /// Positioned at the token `text[start..end]`.
    Token { start: usize, end: usize },
    /// No further tokens.
    Exhausted,
}

/// A lazy iterator over the tokens of a string, split on a set of delimiter
/// characters.
///
/// A token is a maximal run of non-delimiter characters. Runs of delimiters
/// are collapsed, and leading or trailing delimiters never produce empty
/// tokens.
///
/// The tokenizer borrows its text and owns its [`Delimiters`]. Construction
/// positions it on the first token right away; [`Self::current`] reads the
/// token under the cursor and [`Self::advance`] moves to the next one. It also
/// implements [`Iterator`], which is how it is most commonly consumed:
///
/// ```
/// # use delimit::Tokenizer;
/// let tokens: Vec<_> = Tokenizer::new("1 2  3   end", " ").collect();
/// assert_eq!(tokens, ["1", "2", "3", "end"]);
///
/// let tokens: Vec<_> = Tokenizer::new("a,b;c", ",;").collect();
/// assert_eq!(tokens, ["a", "b", "c"]);
/// ```
///
/// ## Equality
///
/// Two tokenizers compare equal when both are exhausted, or when both are
/// positioned at the same starting offset. The text and delimiters are *not*
/// compared. This makes [`Tokenizer::default`] usable as an end marker:
///
/// ```
/// # use delimit::Tokenizer;
/// let end = Tokenizer::default();
/// let mut tokenizer = Tokenizer::new("a b", " ");
/// let mut seen = Vec::new();
/// while tokenizer != end {
///     seen.push(tokenizer.current().unwrap());
///     tokenizer.advance();
/// }
/// assert_eq!(seen, ["a", "b"]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'t> {
    text: &'t str,
    delimiters: Delimiters,
    cursor: Cursor,
}

impl<'t> Tokenizer<'t> {
    /// Creates a tokenizer over `text`, splitting on each character of
    /// `delimiters`, and positions it at the first token.
    ///
    /// The delimiter set is moved into the tokenizer. It can be recovered
    /// with [`Self::into_delimiters`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use delimit::Tokenizer;
    /// let tokenizer = Tokenizer::new("  first second", " ");
    /// assert_eq!(tokenizer.current(), Some("first"));
    ///
    /// let tokenizer = Tokenizer::new("   ", " ");
    /// assert!(tokenizer.is_exhausted());
    /// ```
    pub fn new(text: &'t str, delimiters: impl Into<Delimiters>) -> Self {
        let mut tokenizer = Self {
            text,
            delimiters: delimiters.into(),
            cursor: Cursor::Token { start: 0, end: 0 },
        };
        trace!(
            len = text.len(),
            delimiters = tokenizer.delimiters.as_str(),
            "creating tokenizer"
        );
        tokenizer.advance();
        tokenizer
    }

    /// Creates a tokenizer over `text` which splits on the space character.
    ///
    /// ```
    /// # use delimit::Tokenizer;
    /// let words: Vec<_> = Tokenizer::whitespace(" 001  Smith\tJohn ").collect();
    /// assert_eq!(words, ["001", "Smith\tJohn"]);
    /// ```
    pub fn whitespace(text: &'t str) -> Self {
        Self::new(text, Delimiters::default())
    }

    /// Moves to the next token, or to the exhausted state if there is none.
    ///
    /// Advancing an exhausted tokenizer has no effect. Returns `self` so that
    /// calls can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// # use delimit::Tokenizer;
    /// let mut tokenizer = Tokenizer::new("a b c", " ");
    /// assert_eq!(tokenizer.advance().advance().current(), Some("c"));
    /// assert!(tokenizer.advance().is_exhausted());
    /// assert!(tokenizer.advance().is_exhausted());
    /// ```
    pub fn advance(&mut self) -> &mut Self {
        let Cursor::Token { end: from, .. } = self.cursor else {
            return self;
        };
        self.cursor = match self.delimiters.find_first_not_in(&self.text[from..]) {
            Some(offset) => {
                let start = from + offset;
                let end = self
                    .delimiters
                    .find_first_in(&self.text[start..])
                    .map_or(self.text.len(), |offset| start + offset);
                Cursor::Token { start, end }
            }
            None => {
                trace!(len = self.text.len(), "tokenizer exhausted");
                Cursor::Exhausted
            }
        };
        self
    }

    /// Advances to the next token, returning the tokenizer as it was before
    /// advancing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use delimit::Tokenizer;
    /// let mut tokenizer = Tokenizer::new("a b", " ");
    /// let prior = tokenizer.post_advance();
    /// assert_eq!(prior.current(), Some("a"));
    /// assert_eq!(tokenizer.current(), Some("b"));
    /// ```
    #[must_use = "use `advance` if the prior state is not needed"]
    pub fn post_advance(&mut self) -> Self {
        let prior = self.clone();
        self.advance();
        prior
    }

    /// Returns the token under the cursor, or `None` if the tokenizer is
    /// exhausted.
    pub fn current(&self) -> Option<&'t str> {
        self.span().map(|span| &self.text[span])
    }

    /// Returns the token under the cursor.
    ///
    /// # Errors
    /// Returns [`ExhaustedError`] if there are no more tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// # use delimit::Tokenizer;
    /// let tokenizer = Tokenizer::new("only", " ");
    /// assert_eq!(tokenizer.get(), Ok("only"));
    ///
    /// let err = Tokenizer::new(" ; ", "; ").get().unwrap_err();
    /// assert_eq!(err.offset(), 3);
    /// ```
    pub fn get(&self) -> Result<&'t str, ExhaustedError> {
        self.current().ok_or(ExhaustedError {
            offset: self.text.len(),
        })
    }

    /// Returns an owned copy of the token under the cursor, or `None` if the
    /// tokenizer is exhausted.
    pub fn current_owned(&self) -> Option<String> {
        self.current().map(ToString::to_string)
    }

    /// The half-open byte range of the token under the cursor, or `None` if
    /// the tokenizer is exhausted.
    ///
    /// ```
    /// # use delimit::Tokenizer;
    /// let tokenizer = Tokenizer::new("  abc ", " ");
    /// assert_eq!(tokenizer.span(), Some(2..5));
    /// ```
    pub fn span(&self) -> Option<Range<usize>> {
        match self.cursor {
            Cursor::Token { start, end } => Some(start..end),
            Cursor::Exhausted => None,
        }
    }

    /// Returns `true` if there are no more tokens.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.cursor, Cursor::Exhausted)
    }

    /// The text being tokenized.
    pub fn text(&self) -> &'t str {
        self.text
    }

    /// The delimiter set this tokenizer splits on.
    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    /// Consumes the tokenizer, returning its delimiter set.
    pub fn into_delimiters(self) -> Delimiters {
        self.delimiters
    }

    /// The unconsumed text, starting at the token under the cursor.
    ///
    /// Returns an empty string if the tokenizer is exhausted.
    ///
    /// ```
    /// # use delimit::Tokenizer;
    /// let mut tokenizer = Tokenizer::new("XXR 9  rounds left", " ");
    /// tokenizer.advance();
    /// assert_eq!(tokenizer.remainder(), "9  rounds left");
    /// ```
    pub fn remainder(&self) -> &'t str {
        match self.cursor {
            Cursor::Token { start, .. } => &self.text[start..],
            Cursor::Exhausted => "",
        }
    }

    /// Converts into an iterator of [`Token`](crate::Token)s, which carry
    /// their offset and index alongside the text.
    pub fn tokens(self) -> Tokens<'t> {
        Tokens::from(self)
    }

    /// Starting offset of the current token, used for equality.
    fn start(&self) -> Option<usize> {
        match self.cursor {
            Cursor::Token { start, .. } => Some(start),
            Cursor::Exhausted => None,
        }
    }
}

impl Default for Tokenizer<'_> {
    /// An exhausted tokenizer over no text, for use as an end marker.
    fn default() -> Self {
        Self {
            text: "",
            delimiters: Delimiters::empty(),
            cursor: Cursor::Exhausted,
        }
    }
}

impl PartialEq for Tokenizer<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.start() == other.start()
    }
}

impl Eq for Tokenizer<'_> {}

impl<'t> Iterator for Tokenizer<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.current()?;
        self.advance();
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.cursor {
            // every token but the last is followed by at least one delimiter
            Cursor::Token { start, .. } => (1, Some((self.text.len() - start + 1) / 2)),
            Cursor::Exhausted => (0, Some(0)),
        }
    }
}

impl FusedIterator for Tokenizer<'_> {}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                    Tests                                     ║
║                                   ¯¯¯¯¯¯¯                                    ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arbitrary::{Delimited, Undelimited};
    use alloc::vec::Vec;
    use quickcheck_macros::quickcheck;

    fn split<'t>(text: &'t str, delimiters: &str) -> Vec<&'t str> {
        Tokenizer::new(text, delimiters).collect()
    }

    #[test]
    fn numbered_scenario() {
        let mut tokenizer = Tokenizer::new("1 2  3   end", " ");
        let end = Tokenizer::default();
        for expected in ["1", "2", "3", "end"] {
            assert_ne!(tokenizer, end);
            assert_eq!(tokenizer.current(), Some(expected));
            tokenizer.advance();
        }
        assert_eq!(tokenizer, end);
        assert_eq!(tokenizer.current(), None);
    }

    #[test]
    fn empty_text() {
        for delimiters in ["", " ", ",;", "\t\n"] {
            let tokenizer = Tokenizer::new("", delimiters);
            assert!(tokenizer.is_exhausted());
            assert_eq!(tokenizer, Tokenizer::default());
            assert_eq!(tokenizer.count(), 0);
        }
    }

    #[test]
    fn collapses_delimiters() {
        assert_eq!(split("a   b", " "), ["a", "b"]);
        assert_eq!(split("  a b  ", " "), ["a", "b"]);
        assert_eq!(split("a,b;c", ",;"), ["a", "b", "c"]);
        assert_eq!(split(",;a;;,b,", ",;"), ["a", "b"]);
    }

    #[test]
    fn only_delimiters() {
        assert!(split("     ", " ").is_empty());
        assert!(split(";,;,", ",;").is_empty());
    }

    #[test]
    fn empty_delimiters() {
        assert_eq!(split("a b,c", ""), ["a b,c"]);
        assert!(split("", "").is_empty());
    }

    #[test]
    fn space_only_by_default() {
        let tokens: Vec<_> = Tokenizer::whitespace("a\tb  c\nd").collect();
        assert_eq!(tokens, ["a\tb", "c\nd"]);
    }

    #[test]
    fn non_ascii_text() {
        assert_eq!(split("héllo wörld", " "), ["héllo", "wörld"]);
        assert_eq!(split("α·β··γ", "·"), ["α", "β", "γ"]);
    }

    #[test]
    fn default_tokenizers_are_equal() {
        let a = Tokenizer::default();
        let b = Tokenizer::default();
        assert_eq!(a, b);
        assert!(a.is_exhausted());
        assert_eq!(a.text(), "");
        assert!(a.delimiters().is_empty());
    }

    #[test]
    fn equality_is_by_start() {
        let a = Tokenizer::new("ab cd", " ");
        let b = Tokenizer::new("xy", ",");
        // different text and delimiters, same starting offset
        assert_eq!(a, b);
        let mut c = a.clone();
        c.advance();
        assert_ne!(a, c);
    }

    #[test]
    fn post_advance() {
        let mut tokenizer = Tokenizer::new("a b", " ");
        let prior = tokenizer.post_advance();
        assert_eq!(prior.current(), Some("a"));
        assert_eq!(tokenizer.current(), Some("b"));
        let prior = tokenizer.post_advance();
        assert_eq!(prior.current(), Some("b"));
        assert!(tokenizer.is_exhausted());
        let prior = tokenizer.post_advance();
        assert!(prior.is_exhausted());
        assert!(tokenizer.is_exhausted());
    }

    #[test]
    fn accessors() {
        let mut tokenizer = Tokenizer::new(" key = value ", " =");
        assert_eq!(tokenizer.current(), Some("key"));
        assert_eq!(tokenizer.get(), Ok("key"));
        assert_eq!(tokenizer.current_owned(), Some(String::from("key")));
        assert_eq!(tokenizer.span(), Some(1..4));
        assert_eq!(tokenizer.remainder(), "key = value ");

        tokenizer.advance();
        assert_eq!(tokenizer.current(), Some("value"));
        assert_eq!(tokenizer.span(), Some(7..12));
        assert_eq!(tokenizer.remainder(), "value ");

        tokenizer.advance();
        assert_eq!(tokenizer.current(), None);
        assert_eq!(tokenizer.current_owned(), None);
        assert_eq!(tokenizer.span(), None);
        assert_eq!(tokenizer.remainder(), "");
        assert_eq!(tokenizer.get(), Err(ExhaustedError { offset: 13 }));
        assert_eq!(tokenizer.into_delimiters().as_str(), " =");
    }

    #[test]
    fn size_hint() {
        let mut tokenizer = Tokenizer::new("a b c", " ");
        assert_eq!(tokenizer.size_hint(), (1, Some(3)));
        tokenizer.advance();
        assert_eq!(tokenizer.size_hint(), (1, Some(2)));
        tokenizer.advance();
        assert_eq!(tokenizer.size_hint(), (1, Some(1)));
        tokenizer.advance();
        assert_eq!(tokenizer.size_hint(), (0, Some(0)));
    }

    #[test]
    fn fused() {
        let mut tokenizer = Tokenizer::new("a", " ");
        assert_eq!(tokenizer.next(), Some("a"));
        assert_eq!(tokenizer.next(), None);
        assert_eq!(tokenizer.next(), None);
    }

    #[test]
    #[cfg(feature = "std")]
    fn shared_across_threads() {
        let text = String::from("r1 r2 r3 r4");
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| Tokenizer::whitespace(&text).count()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), 4);
            }
        });
    }

    #[quickcheck]
    fn undelimited_text_is_one_token(text: Undelimited) -> bool {
        let tokens = split(&text.text, text.delimiters.as_str());
        if text.text.is_empty() {
            tokens.is_empty()
        } else {
            tokens == [text.text.as_str()]
        }
    }

    #[quickcheck]
    fn tokens_contain_no_delimiters(input: Delimited) -> bool {
        let tokenizer = Tokenizer::new(&input.text, input.delimiters.clone());
        tokenizer
            .into_iter()
            .all(|token| !token.is_empty() && !token.chars().any(|c| input.delimiters.contains(c)))
    }

    #[quickcheck]
    fn resplitting_normalized_form_is_stable(input: Delimited) -> bool {
        let Some(joiner) = input.delimiters.iter().next() else {
            return true;
        };
        let tokens = split(&input.text, input.delimiters.as_str());
        let mut buf = [0; 4];
        let joiner: &str = joiner.encode_utf8(&mut buf);
        let normalized = tokens.join(joiner);
        split(&normalized, input.delimiters.as_str()) == tokens
    }

    #[quickcheck]
    fn spans_are_ordered_and_in_bounds(input: Delimited) -> bool {
        let mut tokenizer = Tokenizer::new(&input.text, input.delimiters);
        let mut last_end = 0;
        while let Some(span) = tokenizer.span() {
            if span.start < last_end || span.start >= span.end || span.end > input.text.len() {
                return false;
            }
            last_end = span.end;
            tokenizer.advance();
        }
        true
    }

    #[quickcheck]
    fn matches_str_split(input: Delimited) -> bool {
        let expected: Vec<&str> = input
            .text
            .split(|c| input.delimiters.contains(c))
            .filter(|s| !s.is_empty())
            .collect();
        split(&input.text, input.delimiters.as_str()) == expected
    }

    #[quickcheck]
    fn fresh_tokenizer_is_not_end(input: Delimited) -> bool {
        let tokenizer = Tokenizer::new(&input.text, input.delimiters);
        let count = tokenizer.clone().count();
        (count == 0) == (tokenizer == Tokenizer::default())
    }
}
