//! Results emitted by the parser and the sink that receives them.
//!
//! A successful line produces [`ParseEvent::Value`] carrying an [`Entry`]
//! whose fields borrow from the input buffer. A malformed line produces
//! [`ParseEvent::Error`].
//!
//! # Examples
//!
//! ```
//! use panini::{Entry, ParseEvent, Parser};
//!
//! let events: Vec<_> = Parser::new("[menu]\npanini = bread").collect();
//! assert_eq!(
//!     events,
//!     vec![ParseEvent::Value(Entry {
//!         section: "menu",
//!         key: "panini",
//!         value: "bread",
//!         line: 2,
//!     })]
//! );
//! ```
use crate::{error::ParserError, parser::State};

/// A key/value pair and the section it was declared under.
///
/// All three strings are trimmed views into the parsed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize))]
pub struct Entry<'src> {
    /// Name of the most recent `[section]`, or `""` before the first one.
    pub section: &'src str,
    /// Text before `=`.
    pub key: &'src str,
    /// Text after `=`, up to the end of the line or a trailing comment.
    pub value: &'src str,
    /// The physical line the pair was read from, counting from 1.
    pub line: usize,
}

impl<'src> Entry<'src> {
    /// `(section, key, value)`, dropping the line number.
    #[must_use]
    pub const fn into_tuple(self) -> (&'src str, &'src str, &'src str) {
        (self.section, self.key, self.value)
    }
}

/// One result of scanning the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize))]
#[cfg_attr(any(test, feature = "serde"), serde(tag = "event"))]
pub enum ParseEvent<'src> {
    /// A line ending in a value (possibly empty).
    Value(Entry<'src>),
    /// A line that violated the grammar.
    Error(ParserError),
}

impl<'src> ParseEvent<'src> {
    /// The state a sink sees for this event: [`State::Value`] or
    /// [`State::Error`].
    #[must_use]
    pub const fn state(&self) -> State {
        match self {
            Self::Value(_) => State::Value,
            Self::Error(_) => State::Error,
        }
    }

    /// The entry, if this is a value event.
    #[must_use]
    pub const fn as_entry(&self) -> Option<&Entry<'src>> {
        match self {
            Self::Value(entry) => Some(entry),
            Self::Error(_) => None,
        }
    }

    /// The error, if this is an error event.
    #[must_use]
    pub const fn as_error(&self) -> Option<&ParserError> {
        match self {
            Self::Value(_) => None,
            Self::Error(err) => Some(err),
        }
    }

    /// Converts into a `Result`, for callers that prefer `?`.
    ///
    /// # Errors
    ///
    /// Returns the [`ParserError`] if this is an error event.
    pub const fn into_result(self) -> Result<Entry<'src>, ParserError> {
        match self {
            Self::Value(entry) => Ok(entry),
            Self::Error(err) => Err(err),
        }
    }
}

/// Receives parse results in document order.
///
/// On [`State::Value`] the arguments are the section, key and value. On
/// [`State::Error`] they are the 1-based line number as decimal text, the
/// error message and an empty string.
///
/// Any `FnMut(State, &str, &str, &str)` closure is a sink.
pub trait Sink {
    /// Called once per successful line and once per malformed line.
    fn accept(&mut self, state: State, section: &str, key: &str, value: &str);
}

impl<F> Sink for F
where
    F: FnMut(State, &str, &str, &str),
{
    #[inline]
    fn accept(&mut self, state: State, section: &str, key: &str, value: &str) {
        self(state, section, key, value);
    }
}
