//! The evaluator.

use llgc_reader::Reader;
use llgc_value::{Context, Error, EvalResult, NativeFn, Value};
use tracing::trace;

/// Evaluate `expr` in `ctx`.
///
/// Every non-list value, `Nil` included, evaluates to itself. A list
/// `(f args...)` looks `f` up and calls the native function bound to it
/// with `(args...)`:
///
/// - head not a symbol: `TypeMismatch` (expected Symbol)
/// - symbol unbound: `UnboundSymbol`
/// - bound to anything but a native function: `TypeMismatch`
///
/// Whatever the native function returns, value or error, is the result.
pub fn eval(ctx: &Context, expr: &Value) -> EvalResult {
    if !expr.is_list() {
        trace!(kind = %expr.kind(), "self-evaluating");
        return Ok(expr.clone());
    }
    let name = expr.head()?.as_symbol()?;
    let func = ctx
        .lookup(name)
        .ok_or_else(|| Error::unbound_symbol(name))?
        .as_native_fn()?;
    apply(ctx, name, func, expr.tail()?.clone())
}

#[tracing::instrument(level = "debug", skip(ctx, func, args))]
fn apply(ctx: &Context, name: &str, func: NativeFn, args: Value) -> EvalResult {
    let result = func(ctx, args);
    match &result {
        Ok(value) => trace!(%value, "returned"),
        Err(err) => tracing::debug!(%err, "failed"),
    }
    result
}

/// Read every top-level form of `source` and evaluate each in turn.
///
/// Stops at the first read or evaluation error; forms after it are
/// neither read nor evaluated.
pub fn eval_source(ctx: &Context, source: &str) -> EvalResult<Vec<Value>> {
    Reader::new(source)
        .map(|form| form.and_then(|form| eval(ctx, &form)))
        .collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
