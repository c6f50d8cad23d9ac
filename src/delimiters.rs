//! The set of characters a [`Tokenizer`](crate::Tokenizer) splits on.
//!
//! Delimiters are matched by exact character value. There is no notion of
//! Unicode whitespace classes or locale: `'\t'` is only a delimiter if it was
//! put into the set.
//!
//! ```
//! # use delimit::Delimiters;
//! let delims = Delimiters::new(",;");
//! assert!(delims.contains(','));
//! assert!(delims.contains(';'));
//! assert!(!delims.contains(' '));
//!
//! // the default set is the single space character
//! assert_eq!(Delimiters::default().as_str(), " ");
//! ```

use alloc::{string::String, vec::Vec};
use core::{fmt, str::Chars};

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                  Delimiters                                  ║
║                                 ¯¯¯¯¯¯¯¯¯¯¯¯                                 ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// An owned, immutable set of delimiter characters.
///
/// Each character is stored once, in the order it was first seen. ASCII
/// characters are additionally recorded in a 128-bit mask so that
/// [`Self::contains`] is a single bit test for them.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Delimiters {
    chars: String,
    ascii: u128,
    has_non_ascii: bool,
}

impl Delimiters {
    /// Creates a delimiter set from every character of `chars`.
    ///
    /// Repeated characters are collapsed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use delimit::Delimiters;
    /// let delims = Delimiters::new(" \t ");
    /// assert_eq!(delims.as_str(), " \t");
    /// assert_eq!(delims.len(), 2);
    /// ```
    pub fn new(chars: impl AsRef<str>) -> Self {
        chars.as_ref().chars().collect()
    }

    /// Creates a delimiter set containing no characters.
    ///
    /// A tokenizer over an empty set yields the entire text as a single
    /// token, or nothing if the text is empty.
    pub const fn empty() -> Self {
        Self {
            chars: String::new(),
            ascii: 0,
            has_non_ascii: false,
        }
    }

    /// Returns `true` if `c` is a member of this set.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        if c.is_ascii() {
            self.ascii & (1u128 << (c as u32)) != 0
        } else {
            self.has_non_ascii && self.chars.contains(c)
        }
    }

    /// The characters of this set, as a string in first-seen order.
    pub fn as_str(&self) -> &str {
        &self.chars
    }

    /// The number of distinct characters in this set.
    pub fn len(&self) -> usize {
        if self.has_non_ascii {
            self.chars.chars().count()
        } else {
            self.chars.len()
        }
    }

    /// Returns `true` if this set contains no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// An iterator over the characters of this set.
    pub fn iter(&self) -> Chars<'_> {
        self.chars.chars()
    }

    /// Returns the position of the first character in `text` which is not
    /// a delimiter, or `None` if `text` consists solely of delimiters.
    pub(crate) fn find_first_not_in(&self, text: &str) -> Option<usize> {
        text.char_indices()
            .find_map(|(i, c)| (!self.contains(c)).then_some(i))
    }

    /// Returns the position of the first delimiter in `text`, or `None` if
    /// there is none.
    pub(crate) fn find_first_in(&self, text: &str) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        text.char_indices()
            .find_map(|(i, c)| self.contains(c).then_some(i))
    }

    fn insert(&mut self, c: char) {
        if self.contains(c) {
            return;
        }
        if c.is_ascii() {
            self.ascii |= 1u128 << (c as u32);
        } else {
            self.has_non_ascii = true;
        }
        self.chars.push(c);
    }
}

impl Default for Delimiters {
    /// The single space character (`' '`).
    fn default() -> Self {
        Self::from(' ')
    }
}

impl fmt::Debug for Delimiters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Delimiters").field(&self.chars).finish()
    }
}

impl fmt::Display for Delimiters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.chars)
    }
}

impl FromIterator<char> for Delimiters {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut delims = Self::empty();
        for c in iter {
            delims.insert(c);
        }
        delims
    }
}

impl Extend<char> for Delimiters {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for c in iter {
            self.insert(c);
        }
    }
}

impl From<char> for Delimiters {
    fn from(c: char) -> Self {
        let mut delims = Self::empty();
        delims.insert(c);
        delims
    }
}

impl From<&str> for Delimiters {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<&String> for Delimiters {
    fn from(value: &String) -> Self {
        Self::new(value)
    }
}

impl From<String> for Delimiters {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&[char]> for Delimiters {
    fn from(value: &[char]) -> Self {
        value.iter().copied().collect()
    }
}

impl<const N: usize> From<[char; N]> for Delimiters {
    fn from(value: [char; N]) -> Self {
        value.into_iter().collect()
    }
}

impl From<Vec<char>> for Delimiters {
    fn from(value: Vec<char>) -> Self {
        value.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Delimiters {
    type Item = char;
    type IntoIter = Chars<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Delimiters {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.chars)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Delimiters {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{Error, Visitor};
        struct DelimitersVisitor;
        impl Visitor<'_> for DelimitersVisitor {
            type Value = Delimiters;
            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string of delimiter characters")
            }
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                Ok(Delimiters::new(v))
            }
        }
        deserializer.deserialize_str(DelimitersVisitor)
    }
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                    Tests                                     ║
║                                   ¯¯¯¯¯¯¯                                    ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/
