//! Recursive-descent reader.
//!
//! [`read`] is the primitive: one form from a position. [`Reader`] walks a
//! whole program form by form and is what drivers use.

use llgc_stack::ensure_sufficient_stack;
use llgc_value::{Error, EvalResult, Malformed, Value};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::cursor::{is_delimiter, Cursor};

/// Elements collected on the stack before a list literal spills to the heap.
const LIST_SCRATCH: usize = 32;

/// What one step of the reader produced.
enum Form {
    Value(Value),
    /// A `)`, already consumed.
    Close,
    Eof,
}

/// Reads successive top-level forms from one source text.
pub struct Reader<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Reader<'a> {
    /// A reader at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Reader {
            cursor: Cursor::new(source),
        }
    }

    /// A reader starting at byte offset `pos`. Offsets past the end start at
    /// end of input.
    pub fn at(source: &'a str, pos: usize) -> EvalResult<Self> {
        let pos = pos.min(source.len());
        let cursor = Cursor::at(source, pos)
            .ok_or_else(|| Error::malformed(Malformed::InvalidPosition))?;
        Ok(Reader { cursor })
    }

    /// Byte offset of the next unread input.
    pub fn position(&self) -> usize {
        self.cursor.pos()
    }

    /// The next top-level form, or `None` once only whitespace remains.
    ///
    /// A `)` with no matching `(` is malformed input here.
    pub fn next_form(&mut self) -> EvalResult<Option<Value>> {
        let start = self.cursor.pos();
        match self.read_form()? {
            Form::Value(value) => {
                trace!(start, end = self.cursor.pos(), kind = %value.kind(), "read form");
                Ok(Some(value))
            }
            Form::Eof => Ok(None),
            Form::Close => Err(self.malformed(Malformed::UnmatchedClose, self.cursor.pos() - 1)),
        }
    }

    fn read_form(&mut self) -> EvalResult<Form> {
        self.cursor.eat_whitespace();
        let Some(byte) = self.cursor.current() else {
            return Ok(Form::Eof);
        };
        match byte {
            b'(' => {
                let open = self.cursor.pos();
                self.cursor.advance();
                ensure_sufficient_stack(|| self.read_list(open)).map(Form::Value)
            }
            b')' => {
                self.cursor.advance();
                Ok(Form::Close)
            }
            b'"' => self.read_string().map(Form::Value),
            _ => Ok(Form::Value(self.read_atom())),
        }
    }

    /// Elements up to the matching `)`. The cursor is just past `(`.
    fn read_list(&mut self, open: usize) -> EvalResult<Value> {
        let mut items: SmallVec<[Value; LIST_SCRATCH]> = SmallVec::new();
        loop {
            match self.read_form()? {
                Form::Value(item) => items.push(item),
                Form::Close => return Ok(Value::list(items)),
                Form::Eof => return Err(self.malformed(Malformed::UnterminatedList, open)),
            }
        }
    }

    /// A string literal. Its text is kept raw: `\"` stays two characters.
    fn read_string(&mut self) -> EvalResult<Value> {
        let open = self.cursor.pos();
        self.cursor.advance();
        loop {
            match self.cursor.skip_to_string_delim() {
                Some(b'"') => {
                    let text = self.cursor.slice_from(open + 1);
                    self.cursor.advance();
                    return Ok(Value::string(text));
                }
                // Backslash: whatever follows cannot end the string.
                Some(_) => {
                    self.cursor.advance();
                    self.cursor.advance_char();
                }
                None => return Err(self.malformed(Malformed::UnterminatedString, open)),
            }
        }
    }

    fn read_atom(&mut self) -> Value {
        let start = self.cursor.pos();
        self.cursor.eat_while(|b| !is_delimiter(b));
        classify_atom(self.cursor.slice_from(start))
    }

    fn malformed(&self, problem: Malformed, offset: usize) -> Error {
        let err = Error::malformed(problem).at(self.cursor.location(offset));
        debug!(offset, %err, "read failed");
        err
    }
}

impl Iterator for Reader<'_> {
    type Item = EvalResult<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_form().transpose()
    }
}

/// Bool, then Int, then Float, then Symbol. Number parses must consume the
/// whole atom.
fn classify_atom(text: &str) -> Value {
    match text {
        "true" => return Value::bool(true),
        "false" => return Value::bool(false),
        _ => {}
    }
    if let Ok(n) = text.parse::<i64>() {
        return Value::int(n);
    }
    if let Ok(x) = text.parse::<f64>() {
        return Value::float(x);
    }
    Value::symbol(text)
}

/// Read one form starting at byte offset `pos`.
///
/// Returns the form and the offset just past it. Empty or all-whitespace
/// input, `()`, and a `)` closing nothing all produce `Nil`; in the last
/// case the returned offset is past the `)`.
pub fn read(text: &str, pos: usize) -> EvalResult<(Value, usize)> {
    let mut reader = Reader::at(text, pos)?;
    let value = match reader.read_form()? {
        Form::Value(value) => value,
        Form::Close | Form::Eof => Value::NIL,
    };
    Ok((value, reader.position()))
}

/// Every top-level form of `text`, in order.
pub fn read_all(text: &str) -> EvalResult<Vec<Value>> {
    Reader::new(text).collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
