//! Packed source locations.
//!
//! A [`Location`] stores a (line, column) pair in 32 bits: the column in the
//! high 16 bits and the line in the low 16 bits. The reader attaches one to
//! every malformed-input error.

use std::fmt;

/// A (line, column) pair packed into a `u32`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Location(u32);

impl Location {
    /// Pack a line and column.
    #[inline]
    pub const fn new(line: u16, column: u16) -> Self {
        Location(((column as u32) << 16) | line as u32)
    }

    /// Build a location from counts that may exceed 16 bits.
    ///
    /// Values past `u16::MAX` saturate.
    pub fn saturating(line: usize, column: usize) -> Self {
        let line = u16::try_from(line).unwrap_or(u16::MAX);
        let column = u16::try_from(column).unwrap_or(u16::MAX);
        Self::new(line, column)
    }

    /// The line (low 16 bits).
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "masked to 16 bits before the cast"
    )]
    pub const fn line(self) -> u16 {
        (self.0 & 0xFFFF) as u16
    }

    /// The column (high 16 bits).
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "shifted down to 16 bits before the cast"
    )]
    pub const fn column(self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// The packed representation.
    #[inline]
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// Rebuild a location from its packed representation.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Location(bits)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line(), self.column())
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location({}:{})", self.line(), self.column())
    }
}
