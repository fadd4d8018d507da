//! Stack safety for the recursive parts of the llgc runtime.
//!
//! The reader descends once per nested list literal, and printing or
//! comparing values descends once per nested list head. Source like
//! `((((...))))` can nest far deeper than the default thread stack allows,
//! so those recursion points go through [`ensure_sufficient_stack`].
//!
//! Walking along a list's tail never recurses; only nesting depth matters.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker` grows the stack on demand.
//! - **WASM targets**: plain passthrough.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn read_list(&mut self) -> EvalResult<Value> {
///     ensure_sufficient_stack(|| {
///         // ... reads nested forms, which may call read_list again ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
