use super::state::{Field, State};

/// Half-open byte range into the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Empty span positioned at `pos`.
    #[inline]
    pub(crate) const fn empty_at(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Span covering the single byte at `pos`.
    #[inline]
    pub(crate) const fn byte(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos + 1,
        }
    }

    /// Grows the span to end just past the byte at `pos`.
    ///
    /// Only non-whitespace bytes extend a span, which is what trims trailing
    /// whitespace without a second pass.
    #[inline]
    pub(crate) fn extend_to(&mut self, pos: usize) {
        debug_assert!(pos >= self.start);
        self.end = pos + 1;
    }

    /// Borrows the spanned text.
    ///
    /// Span boundaries only ever sit next to ASCII bytes (or the ends of the
    /// input), so they are always char boundaries.
    #[inline]
    pub(crate) fn slice(self, input: &str) -> &str {
        let text = input.get(self.start..self.end);
        debug_assert!(text.is_some(), "span {self:?} is not on a char boundary");
        text.unwrap_or_default()
    }
}

/// Live scan state: the line being read and the spans collected on it.
///
/// `section` survives [`Context::next_line`]; `key` and `value` do not.
#[derive(Debug, Clone, Default)]
pub(crate) struct Context {
    /// Line counter, starting at 0.
    pub line: usize,
    pub state: State,
    pub section: Span,
    pub key: Span,
    pub value: Span,
}

impl Context {
    pub(crate) fn span_mut(&mut self, field: Field) -> &mut Span {
        match field {
            Field::Section => &mut self.section,
            Field::Key => &mut self.key,
            Field::Value => &mut self.value,
        }
    }

    /// Moves on to the next line, carrying the section forward.
    pub(crate) fn next_line(&mut self) {
        *self = Self {
            line: self.line + 1,
            state: State::Undetermined,
            section: self.section,
            ..Self::default()
        };
    }

    /// The 1-based line number reported to callers.
    #[inline]
    pub(crate) const fn reported_line(&self) -> usize {
        self.line + 1
    }
}
