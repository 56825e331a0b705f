//! Stack growth for deep reductions.
//!
//! Reduction recurses once per nested sub-term and once per resolved
//! binding, so a long chain of call-by-name thunks can run far deeper than
//! the term itself. On native targets the stack is grown on demand with
//! `stacker`; on WASM the closure is called directly.

/// Run `f`, first growing the stack if little of it is left.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Grow once less than this much stack remains (128KB).
    const RED_ZONE: usize = 128 * 1024;

    /// Size of each newly allocated stack segment (2MB).
    const SEGMENT: usize = 2 * 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, SEGMENT, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
