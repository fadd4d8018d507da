//! Native functions available in every fresh context.
//!
//! A native function owns its argument list and consumes it with
//! `pop_front`; arguments arrive unevaluated.

use llgc_value::{Context, Error, EvalResult, NativeFn, Value};

/// Name and implementation of every builtin.
pub const BUILTINS: &[(&str, NativeFn)] = &[("+", add)];

/// Bind every entry of [`BUILTINS`] in `ctx`.
pub fn register_builtins(ctx: &mut Context) {
    for &(name, func) in BUILTINS {
        ctx.register(name, func);
    }
}

/// `(+ a b)`: the sum of two integers.
///
/// Arguments past the second are ignored.
pub fn add(_ctx: &Context, mut args: Value) -> EvalResult {
    let a = next_int(&mut args, "+", 2, 0)?;
    let b = next_int(&mut args, "+", 2, 1)?;
    a.checked_add(b)
        .map(Value::int)
        .ok_or_else(|| Error::integer_overflow("+"))
}

/// Pop the next argument and require an integer. `seen` is how many
/// arguments were already taken, for the arity message.
fn next_int(args: &mut Value, name: &str, arity: usize, seen: usize) -> EvalResult<i64> {
    match args.pop_front()? {
        Some(arg) => arg.as_int(),
        None => Err(Error::arity_mismatch(name, arity, seen)),
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
