use thiserror::Error;

/// The ways a line can violate the grammar.
///
/// Every kind is line-scoped: the offending line contributes nothing to the
/// output and scanning resumes on the next line.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize))]
pub enum ErrorKind {
    /// `=` appeared before any key on the line, after a value had already
    /// started, or inside a section declaration.
    #[error("Expected key before '='")]
    ExpectedKey,
    /// The line ended while a key was being read and no `=` was seen.
    #[error("Unexpected end of key")]
    UnexpectedEndOfKey,
    /// The line ended inside `[` without a closing `]`.
    #[error("Unexpected end of section")]
    UnexpectedEndOfSection,
}

impl ErrorKind {
    /// The fixed, human-readable message handed to sinks.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ExpectedKey => "Expected key before '='",
            Self::UnexpectedEndOfKey => "Unexpected end of key",
            Self::UnexpectedEndOfSection => "Unexpected end of section",
        }
    }
}

/// A syntax error together with the 1-based line it was found on.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize))]
#[error("{kind} at line {line}")]
pub struct ParserError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// The physical line, counting from 1.
    pub line: usize,
}

impl ParserError {
    #[must_use]
    pub(crate) const fn new(kind: ErrorKind, line: usize) -> Self {
        Self { kind, line }
    }

    /// Shorthand for `self.kind.message()`.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.kind.message()
    }
}
