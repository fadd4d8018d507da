//! Owned text with a small-string optimization.
//!
//! Symbols and strings share one text type. Text of up to
//! [`INLINE_CAP`] bytes lives inside the value itself; anything longer is
//! moved to a separately owned buffer. Which of the two is in use is never
//! visible through the public API: both read back through [`Text::as_str`].

use std::fmt;
use std::ops::Deref;
use std::str;

/// Largest text (in bytes) stored without a separate allocation.
pub(crate) const INLINE_CAP: usize = 7;

/// Immutable owned UTF-8 text.
#[derive(Clone)]
pub struct Text(Repr);

#[derive(Clone)]
enum Repr {
    Inline { len: u8, buf: [u8; INLINE_CAP] },
    Heap(Box<str>),
}

impl Text {
    /// Copy `s` into a new text.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "len <= INLINE_CAP, which fits in u8"
    )]
    pub fn new(s: &str) -> Self {
        if s.len() <= INLINE_CAP {
            let mut buf = [0u8; INLINE_CAP];
            buf[..s.len()].copy_from_slice(s.as_bytes());
            Text(Repr::Inline {
                len: s.len() as u8,
                buf,
            })
        } else {
            Text(Repr::Heap(Box::from(s)))
        }
    }

    /// Borrow the text.
    #[allow(
        unsafe_code,
        reason = "inline bytes are always a whole &str copied in Text::new"
    )]
    pub fn as_str(&self) -> &str {
        match &self.0 {
            Repr::Inline { len, buf } => {
                // SAFETY: `buf[..len]` was copied from a complete `&str` in
                // `Text::new` and is never mutated afterwards.
                unsafe { str::from_utf8_unchecked(&buf[..*len as usize]) }
            }
            Repr::Heap(s) => s,
        }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        match &self.0 {
            Repr::Inline { len, .. } => *len as usize,
            Repr::Heap(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[cfg(test)]
    pub(crate) fn is_inline(&self) -> bool {
        matches!(self.0, Repr::Inline { .. })
    }
}

impl Deref for Text {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text::new(s)
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Text {}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

#[cfg(test)]
mod tests;
