//! List construction, decomposition and destructive iteration.
//!
//! A list is a chain of cells ending in `Nil`. Cells are immutable once
//! built; "iterating destructively" means advancing a slot along the
//! chain with [`Value::pop_front`], releasing each cell the slot passes.

use crate::errors::{Error, EvalResult};
use crate::value::{Object, Pair, Value, ValueKind};

impl Value {
    /// Build a list cell owning `head` and `tail`.
    ///
    /// Both are moved in; callers that want to keep their own reference
    /// pass a `clone()`.
    pub fn cons(head: Value, tail: Value) -> Value {
        Value::alloc(Object::List(Pair { head, tail }))
    }

    /// Build a `Nil`-terminated list. An empty sequence gives `Nil`.
    pub fn list<I>(items: I) -> Value
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: DoubleEndedIterator,
    {
        items
            .into_iter()
            .rev()
            .fold(Value::NIL, |tail, head| Value::cons(head, tail))
    }

    fn pair(&self) -> EvalResult<&Pair> {
        match self.object() {
            Some(Object::List(pair)) => Ok(pair),
            _ => Err(Error::type_mismatch(ValueKind::List, self.kind())),
        }
    }

    /// First element of a list cell. Borrowed: `clone()` to keep it.
    pub fn head(&self) -> EvalResult<&Value> {
        self.pair().map(|pair| &pair.head)
    }

    /// Remainder of a list cell. Borrowed: `clone()` to keep it.
    pub fn tail(&self) -> EvalResult<&Value> {
        self.pair().map(|pair| &pair.tail)
    }

    /// Take the first element and advance this slot to the rest of the list.
    ///
    /// Returns `Ok(None)` once the slot is `Nil`. A slot holding an atom (an
    /// improper tail) is a type mismatch and is left untouched.
    pub fn pop_front(&mut self) -> EvalResult<Option<Value>> {
        let (head, tail) = match self.object() {
            None => return Ok(None),
            Some(Object::List(pair)) => (pair.head.clone(), pair.tail.clone()),
            Some(_) => return Err(Error::type_mismatch(ValueKind::List, self.kind())),
        };
        // Releases the passed cell; if the slot was its last owner the cell's
        // own references to head and tail go with it.
        *self = tail;
        Ok(Some(head))
    }

    /// Borrowing iterator over the elements of a list.
    ///
    /// Stops at `Nil` or at an improper (atom) tail; [`ListIter::rest`]
    /// tells the two apart.
    pub fn iter(&self) -> ListIter<'_> {
        ListIter { rest: self }
    }
}

/// Iterator returned by [`Value::iter`].
#[derive(Clone)]
pub struct ListIter<'a> {
    rest: &'a Value,
}

impl<'a> ListIter<'a> {
    /// The part of the list not yet yielded.
    pub fn rest(&self) -> &'a Value {
        self.rest
    }
}

impl<'a> Iterator for ListIter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<&'a Value> {
        match self.rest.object() {
            Some(Object::List(pair)) => {
                self.rest = &pair.tail;
                Some(&pair.head)
            }
            _ => None,
        }
    }
}

impl<'a> IntoIterator for &'a Value {
    type Item = &'a Value;
    type IntoIter = ListIter<'a>;

    fn into_iter(self) -> ListIter<'a> {
        self.iter()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
