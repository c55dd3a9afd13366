//! Scanner: forward-only cursor over the input bytes.
//!
//! The scanner knows nothing about the grammar. It hands out one byte at a
//! time, folds `\r\n` into a single line ending, and fast-forwards over
//! comments. Reading past the end of the buffer yields `\0`, so the end of
//! input and an embedded NUL are the same terminator to the parser.
//!
//! Invariants
//! - `pos` only ever increases and never exceeds `bytes.len()`.
//! - After [`Scanner::consume_terminator`] or [`Scanner::skip_comment`]
//!   returns [`LineEnd::Newline`], `pos` is the first byte of the next line.

use bstr::ByteSlice;

/// Bytes that end a comment.
const TERMINATORS: &[u8] = b"\0\n\r";

/// How a line ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineEnd {
    /// `\n`, `\r` or `\r\n`; there may be more input.
    Newline,
    /// End of the buffer or an embedded `\0`; scanning is over.
    EndOfInput,
}

#[derive(Debug, Clone)]
pub(crate) struct Scanner<'src> {
    bytes: &'src [u8],
    pos: usize,
}

impl<'src> Scanner<'src> {
    pub(crate) fn new(input: &'src str) -> Self {
        Self {
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    /// Offset of the byte [`Scanner::peek`] returns.
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// The current byte, or `\0` past the end of the input.
    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.bytes.get(self.pos).copied().unwrap_or(b'\0')
    }

    /// Moves past the current byte.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if self.pos < self.bytes.len() {
            self.pos += 1;
        }
    }

    /// Consumes the terminator under the cursor.
    pub(crate) fn consume_terminator(&mut self) -> LineEnd {
        match self.peek() {
            b'\0' => {
                self.pos = self.bytes.len();
                LineEnd::EndOfInput
            }
            b'\r' => {
                self.advance();
                if self.peek() == b'\n' {
                    self.advance();
                }
                LineEnd::Newline
            }
            byte => {
                debug_assert_eq!(byte, b'\n', "not a terminator: {byte:#04x}");
                self.advance();
                LineEnd::Newline
            }
        }
    }

    /// Skips everything up to and including the end of the current line.
    pub(crate) fn skip_comment(&mut self) -> LineEnd {
        let rest = self.bytes.get(self.pos..).unwrap_or_default();
        match rest.find_byteset(TERMINATORS) {
            Some(offset) => {
                self.pos += offset;
                self.consume_terminator()
            }
            None => {
                self.pos = self.bytes.len();
                LineEnd::EndOfInput
            }
        }
    }
}
