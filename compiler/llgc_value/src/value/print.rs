//! Printing values back as llgc source.
//!
//! Output re-reads to an equal value for every list, symbol, number and
//! boolean: floats always keep a fractional part or an exponent, and strings
//! are printed with their raw (undecoded) text between quotes.

use std::fmt;

use llgc_stack::ensure_sufficient_stack;

use super::{Object, Value};

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.object() {
            None => f.write_str("()"),
            Some(Object::List(pair)) => {
                f.write_str("(")?;
                ensure_sufficient_stack(|| fmt::Display::fmt(&pair.head, f))?;
                let mut rest = &pair.tail;
                loop {
                    match rest.object() {
                        None => break,
                        Some(Object::List(next)) => {
                            f.write_str(" ")?;
                            ensure_sufficient_stack(|| fmt::Display::fmt(&next.head, f))?;
                            rest = &next.tail;
                        }
                        // Improper tail: always an atom, so no recursion.
                        Some(_) => {
                            write!(f, " . {rest}")?;
                            break;
                        }
                    }
                }
                f.write_str(")")
            }
            Some(Object::Symbol(text)) => f.write_str(text),
            Some(Object::String(text)) => write!(f, "\"{text}\""),
            Some(Object::Bool(b)) => write!(f, "{b}"),
            Some(Object::Int(n)) => write!(f, "{n}"),
            Some(Object::Float(x)) => write!(f, "{x:?}"),
            Some(Object::OpaqueHandle(handle)) => {
                write!(f, "#<handle {:p}>", handle.as_ptr::<()>())
            }
            Some(Object::NativeFunction(func)) => write!(f, "#<native-fn {:#x}>", *func as usize),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
