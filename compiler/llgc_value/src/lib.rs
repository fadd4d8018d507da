//! llgc values - the single datum of the llgc runtime.
//!
//! This crate provides:
//! - [`Value`]: a reference-counted handle unifying atoms and list cells,
//!   with `Nil` represented as "no allocation"
//! - List construction, decomposition and destructive iteration
//! - [`Context`]: the symbol-to-value binding table consulted by `eval`
//! - [`Error`] / [`EvalResult`]: the one error type shared by reader and
//!   evaluator
//! - [`Location`]: the packed (line, column) codec used in diagnostics
//!
//! # Ownership
//!
//! Every constructor returns an owned value. Installing a value into a slot
//! (a variable, a list cell, a binding) is a move; taking an additional
//! owner is `clone()`; releasing is `drop`. [`Value::ref_count`] observes
//! the number of owners of an allocated value.
//!
//! Values are single-threaded (`Rc`): embedders that need concurrency keep
//! one runtime per thread.

mod context;
mod errors;
mod list;
mod location;
mod text;
mod value;

pub use context::Context;
pub use errors::{Error, ErrorKind, EvalResult, Malformed};
pub use list::ListIter;
pub use location::Location;
pub use text::Text;
pub use value::{NativeFn, OpaqueHandle, Value, ValueKind};
