//! llgc reader - source text straight to value trees.
//!
//! There is no token stream and no syntax tree: the reader walks the text
//! with a byte [`Cursor`] and builds [`Value`](llgc_value::Value)s as it
//! goes.
//!
//! ```text
//! value := list | string | atom
//! list  := '(' value* ')'
//! string:= '"' char* '"'        ; \" does not terminate
//! atom  := run of non-space, non-paren bytes
//! ```
//!
//! Atoms classify as `true`/`false` → Bool, then whole-atom integer → Int,
//! then whole-atom float → Float, otherwise Symbol.

mod cursor;
mod reader;

pub use cursor::Cursor;
pub use reader::{read, read_all, Reader};
