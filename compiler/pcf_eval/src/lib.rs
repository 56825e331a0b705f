#![deny(clippy::arithmetic_side_effects)]
//! PCF Eval - call-by-name interpreter for PCF terms.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Environment`: a persistent chain of frames binding names to
//!   unevaluated terms (no substitution, no mutation)
//! - `Interpreter`: recursive reduction with one exhaustive `match` over
//!   `Term`; irreducible terms come back as residual terms, not errors
//! - `evaluate_binary`: checked integer arithmetic
//! - `EvalMode`: reduction policy, step budget and recursion limit
//!
//! # Evaluation Order
//!
//! Arguments are bound unevaluated and forced each time they are referenced.
//! Arithmetic is strict in both operands; `ifz` only reduces the branch it
//! takes. In the default mode `fix` and `let` are terminal.

mod environment;
pub mod errors;
mod eval_mode;
mod interpreter;
mod operators;
mod stack;

#[cfg(test)]
mod test_helpers;

pub use environment::{Binding, Declaration, Environment};
pub use errors::{EvalError, EvalResult};
pub use eval_mode::{EvalMode, ModeState};
pub use interpreter::{interpret, Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use stack::ensure_sufficient_stack;
