//! Unary operator implementations for the evaluator.

use crate::errors::{integer_overflow, unary_type_mismatch, EvalResult};
use crate::Value;
use scry_ir::UnaryOp;

/// Evaluate a unary operation.
pub fn evaluate_unary(operand: &Value, op: UnaryOp) -> EvalResult {
    match (op, operand) {
        (UnaryOp::Neg, Value::Int(n)) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("negation")),
        (UnaryOp::Neg, Value::Float(x)) => Ok(Value::Float(-x)),
        (UnaryOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        _ => Err(unary_type_mismatch(op, operand.type_name())),
    }
}
