//! Scanner states and the transition table.
//!
//! Each input byte is classified into a [`CharClass`] and looked up together
//! with the current [`State`] in [`transition`]. The table is pure and total:
//! every pair maps to exactly one [`Step`], so the parser loop only applies
//! actions and never branches on the state itself.

use core::fmt;

use crate::error::ErrorKind;

/// Where the scanner is within the current line.
///
/// Sinks only ever observe [`State::Value`] and [`State::Error`]; the other
/// states are internal positions of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize))]
pub enum State {
    /// Start of a line, nothing but whitespace seen yet.
    #[default]
    Undetermined,
    /// Reading a key.
    Key,
    /// Reading a section name inside `[...]`.
    Section,
    /// Just saw `[`; the section name has not started.
    SectionBegin,
    /// Just saw the closing `]`.
    SectionEnd,
    /// Reading a value.
    Value,
    /// Just saw `=`; the value has not started.
    ValueBegin,
    /// The line violated the grammar and has already been reported.
    Error,
}

impl State {
    /// The variant name, as used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undetermined => "Undetermined",
            Self::Key => "Key",
            Self::Section => "Section",
            Self::SectionBegin => "SectionBegin",
            Self::SectionEnd => "SectionEnd",
            Self::Value => "Value",
            Self::ValueBegin => "ValueBegin",
            Self::Error => "Error",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lexical role of a single input byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CharClass {
    /// `\0`, `\n` or `\r`.
    Terminator,
    /// Space or tab.
    Whitespace,
    /// `;`
    Comment,
    /// `=`
    Separator,
    /// `[`
    SectionOpen,
    /// `]`
    SectionClose,
    /// Anything else, including every byte of a multi-byte UTF-8 sequence.
    Payload,
}

impl CharClass {
    #[inline]
    pub(crate) const fn of(byte: u8) -> Self {
        match byte {
            b'\0' | b'\n' | b'\r' => Self::Terminator,
            b'\t' | b' ' => Self::Whitespace,
            b';' => Self::Comment,
            b'=' => Self::Separator,
            b'[' => Self::SectionOpen,
            b']' => Self::SectionClose,
            _ => Self::Payload,
        }
    }
}

/// The span an action applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Section,
    Key,
    Value,
}

/// Side effect of consuming one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    /// Consume the byte, nothing else.
    None,
    /// Start the span at this byte.
    Begin(Field),
    /// Move the span end to just past this byte.
    Extend(Field),
    /// `[` at the start of a line: forget the previous section.
    OpenSection,
    /// Emit the value read so far, then end the line.
    Emit,
    /// Emit an empty value located at this byte, then end the line.
    EmitEmpty,
    /// End the line without emitting.
    EndLine,
    /// Report an error; the rest of the line is ignored.
    Fail(ErrorKind),
    /// Report an error and end the line.
    FailLine(ErrorKind),
    /// Skip a comment through the end of the line.
    Comment,
    /// Emit the value read so far, then skip a trailing comment.
    EmitThenComment,
}

/// Result of a single transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Step {
    pub next: State,
    pub action: Action,
}

impl Step {
    const fn new(next: State, action: Action) -> Self {
        Self { next, action }
    }

    const fn stay(state: State) -> Self {
        Self::new(state, Action::None)
    }
}

/// Computes what consuming a byte of `class` does in `state`.
///
/// After a line-ending action the next state is always
/// [`State::Undetermined`]; the parser also resets the per-line spans.
pub(crate) const fn transition(state: State, class: CharClass) -> Step {
    use State as S;

    match class {
        CharClass::Terminator => match state {
            S::Key => Step::new(
                S::Undetermined,
                Action::FailLine(ErrorKind::UnexpectedEndOfKey),
            ),
            S::Section | S::SectionBegin => Step::new(
                S::Undetermined,
                Action::FailLine(ErrorKind::UnexpectedEndOfSection),
            ),
            S::ValueBegin => Step::new(S::Undetermined, Action::EmitEmpty),
            S::Value => Step::new(S::Undetermined, Action::Emit),
            S::Undetermined | S::SectionEnd | S::Error => {
                Step::new(S::Undetermined, Action::EndLine)
            }
        },
        CharClass::Whitespace => Step::stay(state),
        CharClass::Comment => match state {
            S::Undetermined => Step::new(S::Undetermined, Action::Comment),
            S::Value => Step::new(S::Undetermined, Action::EmitThenComment),
            _ => payload(state),
        },
        CharClass::Separator => match state {
            S::Key => Step::new(S::ValueBegin, Action::None),
            // one report per line
            S::Error => Step::stay(S::Error),
            _ => Step::new(S::Error, Action::Fail(ErrorKind::ExpectedKey)),
        },
        CharClass::SectionOpen => match state {
            S::Undetermined => Step::new(S::SectionBegin, Action::OpenSection),
            _ => payload(state),
        },
        CharClass::SectionClose => match state {
            S::Section => Step::new(S::SectionEnd, Action::None),
            _ => payload(state),
        },
        CharClass::Payload => payload(state),
    }
}

const fn payload(state: State) -> Step {
    use State as S;

    match state {
        S::Undetermined => Step::new(S::Key, Action::Begin(Field::Key)),
        S::Key => Step::new(S::Key, Action::Extend(Field::Key)),
        S::SectionBegin => Step::new(S::Section, Action::Begin(Field::Section)),
        S::Section => Step::new(S::Section, Action::Extend(Field::Section)),
        S::ValueBegin => Step::new(S::Value, Action::Begin(Field::Value)),
        S::Value => Step::new(S::Value, Action::Extend(Field::Value)),
        S::SectionEnd | S::Error => Step::stay(state),
    }
}
