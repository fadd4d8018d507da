//! Byte cursor over reader input.
//!
//! The reader only ever dispatches on ASCII bytes (parens, quote, backslash,
//! whitespace), so the cursor works on bytes and the positions it stops at
//! are always character boundaries. Multi-byte characters are only ever
//! skipped whole.

use llgc_value::Location;

/// Whitespace separating forms: space, tab, newline, carriage return.
#[inline]
pub(crate) fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Bytes that end an atom.
#[inline]
pub(crate) fn is_delimiter(byte: u8) -> bool {
    is_whitespace(byte) || byte == b'(' || byte == b')'
}

/// Position within a source string.
///
/// [`Copy`], so saving a position for an error location is free.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// A cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// A cursor at byte offset `pos`, or `None` if `pos` is past the end or
    /// inside a multi-byte character.
    pub fn at(source: &'a str, pos: usize) -> Option<Self> {
        source
            .is_char_boundary(pos)
            .then_some(Cursor { source, pos })
    }

    /// The byte under the cursor, `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Width of the UTF-8 character whose first byte is `byte`.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> usize {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one whole character. No-op at end of input.
    #[inline]
    pub fn advance_char(&mut self) {
        if let Some(byte) = self.current() {
            self.pos += Self::utf8_char_width(byte);
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Source text between two offsets that are character boundaries.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.source[start..end]
    }

    /// Source text from `start` up to the cursor.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` holds for the current byte.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(byte) = self.current() {
            if !pred(byte) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Skip space, tab, newline and carriage return.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }

    /// Jump to the next `"` or `\`, returning it, or to end of input
    /// returning `None`.
    pub fn skip_to_string_delim(&mut self) -> Option<u8> {
        let remaining = &self.source.as_bytes()[self.pos..];
        if let Some(offset) = memchr::memchr2(b'"', b'\\', remaining) {
            self.pos += offset;
            self.current()
        } else {
            self.pos = self.source.len();
            None
        }
    }

    /// 1-based line and column of byte `offset`, columns counted in
    /// characters.
    pub fn location(&self, offset: usize) -> Location {
        let before = &self.source.as_bytes()[..offset.min(self.source.len())];
        let line = memchr::memchr_iter(b'\n', before).count() + 1;
        let line_start = memchr::memrchr(b'\n', before).map_or(0, |i| i + 1);
        let column = before[line_start..]
            .iter()
            .filter(|&&b| (b & 0xC0) != 0x80)
            .count()
            + 1;
        Location::saturating(line, column)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
