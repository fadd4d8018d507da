//! The error type shared by the reader, the evaluator and native functions.
//!
//! Every failure in the core is one of a small set of contract violations.
//! They are propagated as [`EvalResult`] all the way to the embedding host,
//! which decides whether to abort. Nothing in the core panics on bad input
//! or on a wrong-typed value.
//!
//! Factory functions (`Error::type_mismatch`, `Error::unbound_symbol`, ...)
//! are the public way to build errors; native functions use them too.

use std::fmt;

use crate::location::Location;
use crate::value::{Value, ValueKind};

/// Result of reading or evaluating. Defaults to producing a [`Value`].
pub type EvalResult<T = Value> = Result<T, Error>;

/// What was wrong with the source text handed to the reader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Malformed {
    /// A `"` with no closing `"`.
    UnterminatedString,
    /// A `(` with no closing `)`.
    UnterminatedList,
    /// A `)` with no `(` to close, at the top level of a program.
    UnmatchedClose,
    /// A read was started at a byte offset inside a UTF-8 character.
    InvalidPosition,
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Malformed::UnterminatedString => write!(f, "unterminated string literal"),
            Malformed::UnterminatedList => write!(f, "unterminated list"),
            Malformed::UnmatchedClose => write!(f, "unexpected `)`"),
            Malformed::InvalidPosition => write!(f, "read position is not on a character boundary"),
        }
    }
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// An accessor, list operation or evaluator step found the wrong variant.
    TypeMismatch { expected: ValueKind, got: ValueKind },
    /// A list head named a symbol with no binding in the context.
    UnboundSymbol { name: String },
    /// A native function ran out of arguments.
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    /// Checked integer arithmetic overflowed.
    IntegerOverflow { operation: String },
    /// The reader could not make sense of its input.
    MalformedInput { problem: Malformed },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::UnboundSymbol { name } => write!(f, "unbound symbol: {name}"),
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "{name} expects {expected} {arg_word}, got {got}")
            }
            Self::IntegerOverflow { operation } => {
                write!(f, "integer overflow in {operation}")
            }
            Self::MalformedInput { problem } => write!(f, "malformed input: {problem}"),
        }
    }
}

/// A failed read or evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    /// Where in the source the problem starts, when known.
    pub location: Option<Location>,
}

impl Error {
    fn from_kind(kind: ErrorKind) -> Self {
        Error {
            kind,
            location: None,
        }
    }

    pub fn type_mismatch(expected: ValueKind, got: ValueKind) -> Self {
        Self::from_kind(ErrorKind::TypeMismatch { expected, got })
    }

    pub fn unbound_symbol(name: impl Into<String>) -> Self {
        Self::from_kind(ErrorKind::UnboundSymbol { name: name.into() })
    }

    pub fn arity_mismatch(name: impl Into<String>, expected: usize, got: usize) -> Self {
        Self::from_kind(ErrorKind::ArityMismatch {
            name: name.into(),
            expected,
            got,
        })
    }

    pub fn integer_overflow(operation: impl Into<String>) -> Self {
        Self::from_kind(ErrorKind::IntegerOverflow {
            operation: operation.into(),
        })
    }

    pub fn malformed(problem: Malformed) -> Self {
        Self::from_kind(ErrorKind::MalformedInput { problem })
    }

    /// Attach a source location.
    #[must_use]
    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind, ErrorKind::TypeMismatch { .. })
    }

    pub fn is_unbound_symbol(&self) -> bool {
        matches!(self.kind, ErrorKind::UnboundSymbol { .. })
    }

    pub fn is_arity_mismatch(&self) -> bool {
        matches!(self.kind, ErrorKind::ArityMismatch { .. })
    }

    pub fn is_malformed_input(&self) -> bool {
        matches!(self.kind, ErrorKind::MalformedInput { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Some(location) => write!(f, "{location}: {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests;
