//! Single-pass INI scanner with borrowed results.
//!
//! Overview
//! - [`Parser`] walks the input one byte at a time. Each byte is classified
//!   (`state::CharClass`) and looked up with the current [`State`] in the pure
//!   transition table (`state::transition`). The loop below only applies the
//!   resulting action.
//! - Sections, keys and values are tracked as byte spans into the input. A
//!   span starts at its first non-whitespace byte and every non-whitespace
//!   byte moves its end, so leading and trailing whitespace never make it into
//!   a result and nothing is rescanned or copied.
//! - Emitted [`Entry`] values borrow from the input for `'src`, not from the
//!   parser, so they outlive it.
//!
//! Lines
//! - `\n`, `\r`, `\r\n`, `\0` and the end of the buffer end a line. The last
//!   two also end the scan.
//! - The section span is carried from line to line until the next `[`. Key
//!   and value spans are cleared at every line end.
//! - A line produces at most one event. After an error the rest of the line
//!   is ignored and the next line starts fresh.
//!
//! Comments
//! - `;` starts a comment at the beginning of a line or once a value has
//!   started. A value followed by a comment is emitted as it stood before the
//!   `;`, and the comment is skipped without a second emission.
//! - Anywhere else `;` is ordinary text, so section names and keys may
//!   contain it.
//! - Text after a section's `]` is ignored, `;` included. An `=` there is
//!   still an error.

use alloc::string::ToString;
use core::iter::FusedIterator;

use crate::{
    error::{ErrorKind, ParserError},
    event::{Entry, ParseEvent, Sink},
    options::ParserOptions,
};

mod scanner;
mod span;
mod state;


use scanner::{LineEnd, Scanner};
use span::{Context, Span};
pub use state::State;
use state::{Action, CharClass, Step, transition};

/// Parses `input`, handing every result to `sink`.
///
/// Results arrive in document order: one call per key/value line and one per
/// malformed line. Lines that are blank, comments, or section headers produce
/// no call.
///
/// # Examples
///
/// ```
/// use panini::State;
///
/// let mut seen = Vec::new();
/// panini::parse("[a]\nk = v\n= oops\n", &mut |state: State, section: &str, key: &str, value: &str| {
///     seen.push(format!("{state} {section} {key} {value}"));
/// });
/// assert_eq!(seen, ["Value a k v", "Error 3 Expected key before '=' "]);
/// ```
pub fn parse<S: Sink + ?Sized>(input: &str, sink: &mut S) {
    parse_with(input, ParserOptions::default(), sink)
}

/// Like [`parse`], with explicit options.
pub fn parse_with<S: Sink + ?Sized>(input: &str, options: ParserOptions, sink: &mut S) {
    for event in Parser::with_options(input, options) {
        match event {
            ParseEvent::Value(entry) => {
                sink.accept(State::Value, entry.section, entry.key, entry.value);
            }
            ParseEvent::Error(err) => {
                let line = err.line.to_string();
                sink.accept(State::Error, &line, err.message(), "");
            }
        }
    }
}

/// Lazy iterator over the [`ParseEvent`]s of an input.
///
/// The parser is finite and fused. Cloning it yields an independent parser
/// positioned at the same place in the input.
#[derive(Debug, Clone)]
pub struct Parser<'src> {
    input: &'src str,
    scanner: Scanner<'src>,
    ctx: Context,
    options: ParserOptions,
    finished: bool,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `input` with default options.
    #[must_use]
    pub fn new(input: &'src str) -> Self {
        Self::with_options(input, ParserOptions::default())
    }

    /// Creates a parser over `input`.
    #[must_use]
    pub fn with_options(input: &'src str, options: ParserOptions) -> Self {
        Self {
            input,
            scanner: Scanner::new(input),
            ctx: Context::default(),
            options,
            finished: false,
        }
    }

    /// The line the scanner is on, counting from 1.
    #[must_use]
    pub fn line(&self) -> usize {
        self.ctx.reported_line()
    }

    /// Whether the whole input has been consumed (or the scan was cut short
    /// by [`ParserOptions::stop_at_first_error`]).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Consumes one byte, or one line ending, or one comment.
    fn step(&mut self) -> Option<ParseEvent<'src>> {
        let pos = self.scanner.pos();
        let Step { next, action } = transition(self.ctx.state, CharClass::of(self.scanner.peek()));
        self.ctx.state = next;

        match action {
            Action::None => self.scanner.advance(),
            Action::Begin(field) => {
                *self.ctx.span_mut(field) = Span::byte(pos);
                self.scanner.advance();
            }
            Action::Extend(field) => {
                self.ctx.span_mut(field).extend_to(pos);
                self.scanner.advance();
            }
            Action::OpenSection => {
                self.ctx.section = Span::empty_at(pos);
                self.scanner.advance();
            }
            Action::Emit => {
                let entry = self.entry();
                self.end_line();
                return Some(ParseEvent::Value(entry));
            }
            Action::EmitEmpty => {
                self.ctx.value = Span::empty_at(pos);
                let entry = self.entry();
                self.end_line();
                return Some(ParseEvent::Value(entry));
            }
            Action::EndLine => self.end_line(),
            Action::Fail(kind) => {
                let err = self.error(kind);
                self.scanner.advance();
                return Some(ParseEvent::Error(err));
            }
            Action::FailLine(kind) => {
                let err = self.error(kind);
                if kind == ErrorKind::UnexpectedEndOfSection {
                    // an unterminated header does not name a section
                    self.ctx.section = Span::default();
                }
                self.end_line();
                return Some(ParseEvent::Error(err));
            }
            Action::Comment => {
                let end = self.scanner.skip_comment();
                self.reset_line(end);
            }
            Action::EmitThenComment => {
                let entry = self.entry();
                let end = self.scanner.skip_comment();
                self.reset_line(end);
                return Some(ParseEvent::Value(entry));
            }
        }

        None
    }

    fn entry(&self) -> Entry<'src> {
        Entry {
            section: self.ctx.section.slice(self.input),
            key: self.ctx.key.slice(self.input),
            value: self.ctx.value.slice(self.input),
            line: self.ctx.reported_line(),
        }
    }

    fn error(&self, kind: ErrorKind) -> ParserError {
        ParserError::new(kind, self.ctx.reported_line())
    }

    fn end_line(&mut self) {
        let end = self.scanner.consume_terminator();
        self.reset_line(end);
    }

    fn reset_line(&mut self, end: LineEnd) {
        self.ctx.next_line();
        if end == LineEnd::EndOfInput {
            self.finished = true;
        }
    }

    fn report(&mut self, event: ParseEvent<'src>) -> ParseEvent<'src> {
        log_event(&event);

        #[cfg(any(test, feature = "fuzzing"))]
        if let ParseEvent::Error(err) = &event {
            assert!(!self.options.panic_on_error, "Syntax error: {err}");
        }

        if self.options.stop_at_first_error && event.as_error().is_some() {
            self.finished = true;
        }
        event
    }
}

impl<'src> Iterator for Parser<'src> {
    type Item = ParseEvent<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            if let Some(event) = self.step() {
                return Some(self.report(event));
            }
        }
        None
    }
}

impl FusedIterator for Parser<'_> {}

#[cfg(feature = "tracing")]
fn log_event(event: &ParseEvent<'_>) {
    match event {
        ParseEvent::Value(entry) => tracing::trace!(
            line = entry.line,
            section = entry.section,
            key = entry.key,
            value = entry.value,
            "entry"
        ),
        ParseEvent::Error(err) => {
            tracing::debug!(line = err.line, message = err.message(), "line rejected");
        }
    }
}

#[cfg(not(feature = "tracing"))]
#[inline]
fn log_event(_: &ParseEvent<'_>) {}
