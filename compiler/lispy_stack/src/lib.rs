//! Stack growth for deeply nested Lispy programs.
//!
//! Evaluation is plain structural recursion: every nested S-expression,
//! every closure body and every `eval`/`if` re-enters the evaluator. User
//! programs that recurse (a hand-written `fold` over a long list, say) can
//! run far deeper than the default thread stack allows, so the evaluator
//! wraps each re-entry in [`ensure_sufficient_stack`].
//!
//! This is not a recursion limit. A program that recurses forever still
//! recurses forever; it only stops failing at a few thousand frames.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker` allocates a new stack segment when the
//!   remaining space drops below the red zone.
//! - **WASM targets**: passthrough.

/// Remaining stack below which a new segment is allocated (128KB).
///
/// A single `eval` → `apply` → builtin round trip uses a few KB, so this
/// leaves room for several levels between checks.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn eval(&self, env: &Environment, value: Value) -> Value {
///     ensure_sufficient_stack(|| match value {
///         Value::SExpr(cells) => self.eval_sexpr(env, cells),
///         other => other,
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
