//! A zero-copy, single-pass parser for INI-style configuration text.
//!
//! The format has optional `[section]` headers, `key = value` pairs, and
//! `;` comments. Leading and trailing whitespace is trimmed from every name
//! and value; blank lines are ignored.
//!
//! ```ini
//! ; lunch menu
//! [primary]
//! panini = 🥪   ; sandwich
//!
//! [secondary]
//! panini = 🍞
//! ```
//!
//! Nothing is built from the results: the parser either calls a [`Sink`]
//! once per key/value pair or malformed line ([`parse`]), or yields the same
//! results as [`ParseEvent`]s from an iterator ([`Parser`]). Section, key and
//! value strings borrow from the input.
//!
//! ```
//! use panini::{ErrorKind, ParseEvent, Parser};
//!
//! let mut parser = Parser::new("[primary]\npanini = 🥪 ; sandwich\nbread\n");
//!
//! let Some(ParseEvent::Value(entry)) = parser.next() else { unreachable!() };
//! assert_eq!(entry.into_tuple(), ("primary", "panini", "🥪"));
//!
//! let Some(ParseEvent::Error(err)) = parser.next() else { unreachable!() };
//! assert_eq!((err.kind, err.line), (ErrorKind::UnexpectedEndOfKey, 3));
//!
//! assert!(parser.next().is_none());
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod event;
mod options;
mod parser;

#[cfg(test)]
mod tests;

pub use error::{ErrorKind, ParserError};
pub use event::{Entry, ParseEvent, Sink};
pub use options::ParserOptions;
pub use parser::{Parser, State, parse, parse_with};
