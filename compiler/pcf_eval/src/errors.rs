//! Evaluation errors and their constructors.
//!
//! Errors are never caught inside the evaluator: each one aborts the current
//! `interpret` call and reaches the caller unchanged.

use pcf_ir::{BinaryOp, ConstructionError};
use thiserror::Error;

/// Result of an evaluation step.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A name resolved in no frame of the environment chain.
    #[error("unbound identifier `{name}`")]
    UnboundIdentifier { name: String },

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in `{left} {op} {right}`")]
    IntegerOverflow { op: BinaryOp, left: i64, right: i64 },

    /// Nested reductions exceeded the mode's recursion limit.
    #[error("maximum recursion depth exceeded (limit: {depth})")]
    StackOverflow { depth: usize },

    /// The mode's reduction step budget ran out.
    #[error("reduction budget of {budget} steps exceeded")]
    BudgetExceeded { budget: u32 },

    /// A builder handed to the interpreter could not produce a term.
    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

#[cold]
pub fn unbound_identifier(name: &str) -> EvalError {
    EvalError::UnboundIdentifier {
        name: name.to_string(),
    }
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::DivisionByZero
}

#[cold]
pub fn integer_overflow(op: BinaryOp, left: i64, right: i64) -> EvalError {
    EvalError::IntegerOverflow { op, left, right }
}
