//! Error reporting data structures and miette integration.
//!
//! Errors of this crate only carry offsets. A [`Report`] pairs an error with
//! the text it refers to, so that it can be rendered with labels pointing
//! into that text:
//!
//! ```
//! # use delimit::{Diagnose, Tokenizer};
//! let line = "001 ";
//! let mut tokenizer = Tokenizer::new(line, " ");
//! tokenizer.advance();
//! let report = tokenizer.get().diagnose(line).unwrap_err();
//! assert_eq!(report.subject(), "001 ");
//! assert_eq!(report.offset(), 4);
//! ```

use crate::ExhaustedError;
use alloc::{boxed::Box, string::String};
use core::{fmt, iter, ops::Deref};

/// Implemented by errors which can be converted into a [`Report`].
pub trait Diagnostic: Sized {
    /// The value which caused the error.
    type Subject: Deref;

    /// Combine the error with its subject to generate a [`Report`].
    fn into_report(self, subject: impl Into<Self::Subject>) -> Report<Self> {
        Report {
            source: self,
            subject: subject.into(),
        }
    }

    /// The docs.rs URL for this error
    fn url() -> &'static str;

    /// Returns the labels for the given [`Subject`](Self::Subject) if
    /// applicable.
    fn labels(&self, subject: &Self::Subject) -> Option<Box<dyn Iterator<Item = Label>>>;
}

/// A label for a span within the tokenized text.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Label {
    text: String,
    offset: usize,
    len: usize,
}

impl Label {
    /// Creates a new instance of a [`Label`] from its parts
    pub fn new(text: String, offset: usize, len: usize) -> Self {
        Self { text, offset, len }
    }

    /// The message of the label.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte offset the label points at.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length in bytes of the labeled span.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the label points at a position rather than a span.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(feature = "miette")]
impl From<Label> for miette::LabeledSpan {
    fn from(value: Label) -> Self {
        miette::LabeledSpan::new(Some(value.text), value.offset, value.len)
    }
}

/// An error wrapper which includes the subject of the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<D: Diagnostic> {
    source: D,
    subject: D::Subject,
}

impl<D: Diagnostic> Report<D> {
    /// The value which caused the error.
    pub fn subject(&self) -> &<D::Subject as Deref>::Target {
        &self.subject
    }

    /// The error which occurred.
    pub fn original(&self) -> &D {
        &self.source
    }

    /// The original parts of the [`Report`].
    pub fn decompose(self) -> (D, D::Subject) {
        (self.source, self.subject)
    }
}

impl<D: Diagnostic> Deref for Report<D> {
    type Target = D;

    fn deref(&self) -> &Self::Target {
        &self.source
    }
}

impl<D: Diagnostic + fmt::Display> fmt::Display for Report<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.source, f)
    }
}

#[cfg(feature = "std")]
impl<D> std::error::Error for Report<D>
where
    D: Diagnostic + fmt::Debug + std::error::Error + 'static,
    D::Subject: fmt::Debug,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(feature = "miette")]
impl<D> miette::Diagnostic for Report<D>
where
    D: Diagnostic + fmt::Debug + std::error::Error + 'static,
    D::Subject: fmt::Debug + miette::SourceCode,
{
    fn url<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(D::url()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.subject)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + '_>> {
        Some(Box::new(D::labels(self, &self.subject)?.map(Into::into)))
    }
}

macro_rules! diagnostic_url {
    (struct $type:ident) => {
        concat!(
            "https://docs.rs/delimit/",
            env!("CARGO_PKG_VERSION"),
            "/delimit/struct.",
            stringify!($type),
            ".html",
        )
    };
}

impl Diagnostic for ExhaustedError {
    type Subject = String;

    fn url() -> &'static str {
        diagnostic_url!(struct ExhaustedError)
    }

    fn labels(&self, subject: &Self::Subject) -> Option<Box<dyn Iterator<Item = Label>>> {
        // clamp in case the report was built with a different subject
        let offset = self.offset.min(subject.len());
        Some(Box::new(iter::once(Label::new(
            String::from("no token remains after this point"),
            offset,
            0,
        ))))
    }
}

/// Extension trait for converting a `Result` with a [`Diagnostic`] error
/// into a `Result` with a [`Report`].
pub trait Diagnose<T> {
    /// The error type of the `Result`.
    type Error: Diagnostic;

    /// Attaches `subject` to the error, if any.
    #[allow(clippy::missing_errors_doc)]
    fn diagnose(
        self,
        subject: impl Into<<Self::Error as Diagnostic>::Subject>,
    ) -> Result<T, Report<Self::Error>>;

    /// Attaches the subject produced by `f` to the error, if any. `f` is
    /// only called on error.
    #[allow(clippy::missing_errors_doc)]
    fn diagnose_with<F, S>(self, f: F) -> Result<T, Report<Self::Error>>
    where
        F: FnOnce() -> S,
        S: Into<<Self::Error as Diagnostic>::Subject>;
}

impl<T, E> Diagnose<T> for Result<T, E>
where
    E: Diagnostic,
{
    type Error = E;

    fn diagnose(
        self,
        subject: impl Into<<Self::Error as Diagnostic>::Subject>,
    ) -> Result<T, Report<Self::Error>> {
        self.map_err(|error| error.into_report(subject.into()))
    }

    fn diagnose_with<F, S>(self, f: F) -> Result<T, Report<Self::Error>>
    where
        F: FnOnce() -> S,
        S: Into<<Self::Error as Diagnostic>::Subject>,
    {
        self.map_err(|error| error.into_report(f()))
    }
}
