//! The binding table consulted during evaluation.
//!
//! Bindings are kept as an llgc association list, `((name . value) ...)`,
//! so the table is itself an ordinary value. Lookup is a linear scan that
//! returns the first match; a new binding is consed onto the front and
//! therefore shadows any older binding of the same name.
//!
//! A context is passed explicitly to `eval` and to every native function.
//! Independent contexts share nothing, so tests and embedders can run as
//! many runtimes side by side as they like.

use std::fmt;

use crate::value::{NativeFn, Value};

/// Symbol-to-value bindings for one runtime instance.
///
/// Dropping the context releases the association list and, through it,
/// every bound value.
#[derive(Clone, Default)]
pub struct Context {
    bindings: Value,
}

impl Context {
    /// A context with no bindings.
    pub fn new() -> Self {
        Context {
            bindings: Value::NIL,
        }
    }

    /// Bind `name` to a native function.
    pub fn register(&mut self, name: &str, func: NativeFn) {
        self.bind(name, Value::native(func));
    }

    /// Bind `name` to an arbitrary value.
    pub fn bind(&mut self, name: &str, value: Value) {
        let entry = Value::cons(Value::symbol(name), value);
        let older = self.bindings.take();
        self.bindings = Value::cons(entry, older);
    }

    /// The value bound to `name`, if any.
    ///
    /// Borrowed from the context; `clone()` it to keep it longer.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings.iter().find_map(|entry| {
            let key = entry.head().ok()?;
            if key.as_symbol().ok()? == name {
                entry.tail().ok()
            } else {
                None
            }
        })
    }

    /// The association list itself.
    pub fn bindings(&self) -> &Value {
        &self.bindings
    }

    /// Number of bindings, shadowed ones included.
    pub fn len(&self) -> usize {
        self.bindings.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_nil()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("bindings", &self.len())
            .finish()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
