//! Runtime values for the llgc runtime.
//!
//! # Representation
//!
//! A [`Value`] is a nullable reference-counted handle. `Nil`, the empty list
//! and list terminator, is the null handle and owns no allocation. Every
//! other value points at a shared [`Object`]: either a list cell holding two
//! child values, or one atom.
//!
//! ```text
//! let n = Value::int(42);                       // ref_count 1
//! let l = Value::cons(n.clone(), Value::NIL);   // n: ref_count 2
//! drop(l);                                      // n: ref_count 1
//! ```
//!
//! Objects are never mutated after construction, so sharing one between any
//! number of owners is always sound.

mod print;

use std::fmt;
use std::rc::Rc;

use llgc_stack::ensure_sufficient_stack;

use crate::context::Context;
use crate::errors::{Error, EvalResult};
use crate::text::Text;

/// A host function reachable from llgc through a bound symbol.
///
/// Receives the evaluation context and the raw, unevaluated argument list.
pub type NativeFn = fn(&Context, Value) -> EvalResult;

/// Logical type of a value, as reported by [`Value::kind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Nil,
    List,
    Symbol,
    String,
    Bool,
    Int,
    Float,
    OpaqueHandle,
    NativeFunction,
}

impl ValueKind {
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Nil => "Nil",
            ValueKind::List => "List",
            ValueKind::Symbol => "Symbol",
            ValueKind::String => "String",
            ValueKind::Bool => "Bool",
            ValueKind::Int => "Int",
            ValueKind::Float => "Float",
            ValueKind::OpaqueHandle => "OpaqueHandle",
            ValueKind::NativeFunction => "NativeFunction",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An address owned by the embedding program.
///
/// The runtime only stores and returns it: it never dereferences, allocates
/// or frees the referent.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpaqueHandle(*const ());

impl OpaqueHandle {
    pub fn new<T>(ptr: *const T) -> Self {
        OpaqueHandle(ptr.cast())
    }

    pub fn from_ref<T>(referent: &T) -> Self {
        Self::new(std::ptr::from_ref(referent))
    }

    /// The stored address, cast back to the type the host knows it has.
    pub fn as_ptr<T>(self) -> *const T {
        self.0.cast()
    }
}

impl fmt::Debug for OpaqueHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OpaqueHandle({:p})", self.0)
    }
}

/// The shared payload behind a non-`Nil` value.
pub(crate) enum Object {
    List(Pair),
    Symbol(Text),
    String(Text),
    Bool(bool),
    Int(i64),
    Float(f64),
    OpaqueHandle(OpaqueHandle),
    NativeFunction(NativeFn),
}

/// A list cell.
pub(crate) struct Pair {
    pub(crate) head: Value,
    pub(crate) tail: Value,
}

impl Drop for Pair {
    /// Releases nested cells with an explicit worklist.
    ///
    /// The compiler-generated drop would recurse once per cell, along the
    /// tail of long lists and through the heads of deeply nested ones. Each
    /// uniquely owned child cell is instead detached from its children and
    /// dropped empty; a cell that is still shared only loses one owner.
    fn drop(&mut self) {
        if !self.head.is_list() && !self.tail.is_list() {
            return;
        }
        let mut pending = vec![self.head.take(), self.tail.take()];
        while let Some(value) = pending.pop() {
            let Some(rc) = value.0 else { continue };
            if let Ok(Object::List(mut pair)) = Rc::try_unwrap(rc) {
                pending.push(pair.head.take());
                pending.push(pair.tail.take());
            }
        }
    }
}

impl Object {
    fn kind(&self) -> ValueKind {
        match self {
            Object::List(_) => ValueKind::List,
            Object::Symbol(_) => ValueKind::Symbol,
            Object::String(_) => ValueKind::String,
            Object::Bool(_) => ValueKind::Bool,
            Object::Int(_) => ValueKind::Int,
            Object::Float(_) => ValueKind::Float,
            Object::OpaqueHandle(_) => ValueKind::OpaqueHandle,
            Object::NativeFunction(_) => ValueKind::NativeFunction,
        }
    }
}

/// A reference-counted llgc datum, or `Nil`.
#[derive(Clone, Default)]
pub struct Value(Option<Rc<Object>>);

// Factory methods

impl Value {
    /// The empty list. Owns nothing.
    pub const NIL: Value = Value(None);

    #[inline]
    pub(crate) fn alloc(object: Object) -> Self {
        Value(Some(Rc::new(object)))
    }

    #[inline]
    pub fn bool(v: bool) -> Self {
        Self::alloc(Object::Bool(v))
    }

    #[inline]
    pub fn int(v: i64) -> Self {
        Self::alloc(Object::Int(v))
    }

    #[inline]
    pub fn float(v: f64) -> Self {
        Self::alloc(Object::Float(v))
    }

    pub fn symbol(text: &str) -> Self {
        Self::alloc(Object::Symbol(Text::new(text)))
    }

    pub fn string(text: &str) -> Self {
        Self::alloc(Object::String(Text::new(text)))
    }

    pub fn opaque(handle: OpaqueHandle) -> Self {
        Self::alloc(Object::OpaqueHandle(handle))
    }

    pub fn native(func: NativeFn) -> Self {
        Self::alloc(Object::NativeFunction(func))
    }
}

// Ownership

impl Value {
    /// Release whatever this slot holds and take ownership of `value`.
    ///
    /// Assigning a value to the slot that already holds it leaves the count
    /// unchanged: the new owner is installed as the old one is released.
    pub fn assign(&mut self, value: Value) -> &Value {
        *self = value;
        self
    }

    /// Number of owners of the underlying allocation; 0 for `Nil`.
    pub fn ref_count(&self) -> usize {
        self.0.as_ref().map_or(0, Rc::strong_count)
    }

    /// Whether both handles are `Nil` or share one allocation.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (&self.0, &other.0) {
            (None, None) => true,
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Move the content out, leaving `Nil` behind.
    #[must_use]
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    #[inline]
    pub(crate) fn object(&self) -> Option<&Object> {
        self.0.as_deref()
    }
}

// Type inspection and accessors

impl Value {
    /// The logical type. Both text representations report the same kind.
    pub fn kind(&self) -> ValueKind {
        self.object().map_or(ValueKind::Nil, Object::kind)
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        self.0.is_none()
    }

    /// Whether this is a list cell. `Nil` is not.
    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self.object(), Some(Object::List(_)))
    }

    fn mismatch<T>(&self, expected: ValueKind) -> EvalResult<T> {
        Err(Error::type_mismatch(expected, self.kind()))
    }

    pub fn as_bool(&self) -> EvalResult<bool> {
        match self.object() {
            Some(Object::Bool(b)) => Ok(*b),
            _ => self.mismatch(ValueKind::Bool),
        }
    }

    pub fn as_int(&self) -> EvalResult<i64> {
        match self.object() {
            Some(Object::Int(n)) => Ok(*n),
            _ => self.mismatch(ValueKind::Int),
        }
    }

    pub fn as_float(&self) -> EvalResult<f64> {
        match self.object() {
            Some(Object::Float(x)) => Ok(*x),
            _ => self.mismatch(ValueKind::Float),
        }
    }

    pub fn as_symbol(&self) -> EvalResult<&str> {
        match self.object() {
            Some(Object::Symbol(t)) => Ok(t.as_str()),
            _ => self.mismatch(ValueKind::Symbol),
        }
    }

    /// Text of a String value.
    pub fn as_string(&self) -> EvalResult<&str> {
        match self.object() {
            Some(Object::String(t)) => Ok(t.as_str()),
            _ => self.mismatch(ValueKind::String),
        }
    }

    pub fn as_opaque_handle(&self) -> EvalResult<OpaqueHandle> {
        match self.object() {
            Some(Object::OpaqueHandle(h)) => Ok(*h),
            _ => self.mismatch(ValueKind::OpaqueHandle),
        }
    }

    pub fn as_native_fn(&self) -> EvalResult<NativeFn> {
        match self.object() {
            Some(Object::NativeFunction(func)) => Ok(*func),
            _ => self.mismatch(ValueKind::NativeFunction),
        }
    }
}

// Equality

impl PartialEq for Value {
    /// Structural equality. Floats compare with IEEE semantics and native
    /// functions by address.
    fn eq(&self, other: &Self) -> bool {
        let (mut a, mut b) = (self, other);
        loop {
            if a.ptr_eq(b) {
                return true;
            }
            match (a.object(), b.object()) {
                (Some(Object::List(x)), Some(Object::List(y))) => {
                    if !ensure_sufficient_stack(|| x.head == y.head) {
                        return false;
                    }
                    a = &x.tail;
                    b = &y.tail;
                }
                (Some(x), Some(y)) => return atom_eq(x, y),
                _ => return false,
            }
        }
    }
}

#[allow(
    clippy::float_cmp,
    reason = "values compare exactly; a reader round trip must be bit-stable"
)]
fn atom_eq(a: &Object, b: &Object) -> bool {
    match (a, b) {
        (Object::Symbol(x), Object::Symbol(y)) | (Object::String(x), Object::String(y)) => x == y,
        (Object::Bool(x), Object::Bool(y)) => x == y,
        (Object::Int(x), Object::Int(y)) => x == y,
        (Object::Float(x), Object::Float(y)) => x == y,
        (Object::OpaqueHandle(x), Object::OpaqueHandle(y)) => x == y,
        (Object::NativeFunction(x), Object::NativeFunction(y)) => *x as usize == *y as usize,
        _ => false,
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::float(v)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
