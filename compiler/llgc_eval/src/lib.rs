//! llgc Eval - evaluator and native-function registry.
//!
//! Evaluation is deliberately small: a non-list evaluates to itself, and a
//! list is a call whose head must be a symbol bound to a native function.
//! The function receives the argument list exactly as it was read. Nothing
//! evaluates arguments on its behalf, so `(+ (+ 1 2) 3)` hands `+` a list
//! as its first argument.
//!
//! # Re-exports
//!
//! The value model lives in `llgc_value`; the types a host needs alongside
//! `eval` are re-exported here so `llgc_eval` alone is enough to embed the
//! runtime.

mod builtins;
mod eval;

pub use builtins::{add, register_builtins, BUILTINS};
pub use eval::{eval, eval_source};
pub use llgc_value::{Context, Error, ErrorKind, EvalResult, NativeFn, Value};

/// A context with every builtin registered.
pub fn init_context() -> Context {
    let mut ctx = Context::new();
    register_builtins(&mut ctx);
    ctx
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
