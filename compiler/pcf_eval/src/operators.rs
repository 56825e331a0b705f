//! Integer arithmetic for `BinaryOp` terms.
//!
//! All operations are checked on `i64`. Division truncates toward zero, so
//! `-7 / 2` is `-3`.

use pcf_ir::BinaryOp;

use crate::errors::{division_by_zero, integer_overflow, EvalResult};

/// Apply `op` to two fully reduced operands.
pub fn evaluate_binary(op: BinaryOp, left: i64, right: i64) -> EvalResult<i64> {
    let result = match op {
        BinaryOp::Add => left.checked_add(right),
        BinaryOp::Subtract => left.checked_sub(right),
        BinaryOp::Multiply => left.checked_mul(right),
        BinaryOp::Divide => {
            if right == 0 {
                return Err(division_by_zero());
            }
            // Only `i64::MIN / -1` can fail here.
            left.checked_div(right)
        }
    };
    result.ok_or_else(|| integer_overflow(op, left, right))
}
