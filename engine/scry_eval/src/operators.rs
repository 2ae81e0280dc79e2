//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch: the type set is fixed (not user-extensible),
//! so pattern matching is preferred over trait objects and gives exhaustive
//! checking. Integer arithmetic is checked; float arithmetic never fails
//! (inf/NaN flow through to the formatter).

use crate::errors::{
    binary_type_mismatch, division_by_zero, integer_overflow, invalid_binary_op, modulo_by_zero,
    EvalResult,
};
use crate::Value;
use scry_ir::BinaryOp;

/// Checked i64 arithmetic with overflow handling.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

/// Evaluate a binary operation.
///
/// Mixed int/float operands promote to float before dispatch; everything
/// else must match on type.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Float(a), Value::Float(b)) => eval_float_binary(*a, *b, op),
        (Value::Int(_), Value::Float(b)) => {
            // as_f64 on an Int always yields a value.
            let a = left.as_f64().unwrap_or_default();
            eval_float_binary(a, *b, op)
        }
        (Value::Float(a), Value::Int(_)) => {
            let b = right.as_f64().unwrap_or_default();
            eval_float_binary(*a, b, op)
        }
        (Value::Str(a), Value::Str(b)) => eval_string_binary(a, b, op),
        (Value::Bool(a), Value::Bool(b)) => eval_bool_binary(*a, *b, op),
        _ => Err(binary_type_mismatch(
            op,
            left.type_name(),
            right.type_name(),
        )),
    }
}

/// Binary operations on integers. All arithmetic is checked.
fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                checked_arith(a.checked_div(b), "division")
            }
        }
        BinaryOp::Mod => {
            if b == 0 {
                Err(modulo_by_zero())
            } else {
                checked_arith(a.checked_rem(b), "remainder")
            }
        }
        BinaryOp::Pow => eval_int_pow(a, b),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        BinaryOp::And | BinaryOp::Or => Err(invalid_binary_op(op, "integers")),
    }
}

/// `a ** b` on integers: checked integer power for non-negative exponents,
/// float power for negative ones (so `2 ** -1` is `0.5`, not an error).
#[expect(clippy::cast_precision_loss, reason = "negative exponent promotes to float")]
fn eval_int_pow(a: i64, b: i64) -> EvalResult {
    if b >= 0 {
        let exp = u32::try_from(b).map_err(|_| integer_overflow("power"))?;
        checked_arith(a.checked_pow(exp), "power")
    } else {
        Ok(Value::Float((a as f64).powf(b as f64)))
    }
}

/// Binary operations on floats. Arithmetic cannot fail.
fn eval_float_binary(a: f64, b: f64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::Float(a + b)),
        BinaryOp::Sub => Ok(Value::Float(a - b)),
        BinaryOp::Mul => Ok(Value::Float(a * b)),
        BinaryOp::Div => Ok(Value::Float(a / b)),
        BinaryOp::Mod => Ok(Value::Float(a % b)),
        BinaryOp::Pow => Ok(Value::Float(a.powf(b))),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        BinaryOp::And | BinaryOp::Or => Err(invalid_binary_op(op, "floats")),
    }
}

/// Binary operations on strings: concatenation and lexicographic comparison.
fn eval_string_binary(a: &str, b: &str, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => {
            let mut out = String::with_capacity(a.len() + b.len());
            out.push_str(a);
            out.push_str(b);
            Ok(Value::Str(out))
        }
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        _ => Err(invalid_binary_op(op, "strings")),
    }
}

/// Binary operations on booleans.
///
/// `&&`/`||` are short-circuited by the interpreter before dispatch; the
/// arms here serve direct callers (and keep the table total for bools).
fn eval_bool_binary(a: bool, b: bool, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::And => Ok(Value::Bool(a && b)),
        BinaryOp::Or => Ok(Value::Bool(a || b)),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        _ => Err(invalid_binary_op(op, "booleans")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EvalErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn int_arithmetic() {
        assert_eq!(
            evaluate_binary(&Value::Int(2), &Value::Int(3), BinaryOp::Add),
            Ok(Value::Int(5))
        );
        assert_eq!(
            evaluate_binary(&Value::Int(7), &Value::Int(2), BinaryOp::Div),
            Ok(Value::Int(3))
        );
        assert_eq!(
            evaluate_binary(&Value::Int(7), &Value::Int(2), BinaryOp::Mod),
            Ok(Value::Int(1))
        );
    }

    #[test]
    fn division_by_zero_is_error() {
        let err = evaluate_binary(&Value::Int(1), &Value::Int(0), BinaryOp::Div).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    }

    #[test]
    fn modulo_by_zero_is_error() {
        let err = evaluate_binary(&Value::Int(1), &Value::Int(0), BinaryOp::Mod).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::ModuloByZero);
    }

    #[test]
    fn int_overflow_is_error() {
        let err =
            evaluate_binary(&Value::Int(i64::MAX), &Value::Int(1), BinaryOp::Add).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::IntegerOverflow("addition"));
    }

    #[test]
    fn int_power() {
        assert_eq!(
            evaluate_binary(&Value::Int(2), &Value::Int(10), BinaryOp::Pow),
            Ok(Value::Int(1024))
        );
        assert_eq!(
            evaluate_binary(&Value::Int(2), &Value::Int(-1), BinaryOp::Pow),
            Ok(Value::Float(0.5))
        );
    }

    #[test]
    fn mixed_operands_promote_to_float() {
        assert_eq!(
            evaluate_binary(&Value::Int(1), &Value::Float(0.5), BinaryOp::Add),
            Ok(Value::Float(1.5))
        );
        assert_eq!(
            evaluate_binary(&Value::Float(1.0), &Value::Int(2), BinaryOp::Div),
            Ok(Value::Float(0.5))
        );
    }

    #[test]
    fn float_division_by_zero_is_not_an_error() {
        let result =
            evaluate_binary(&Value::Float(1.0), &Value::Float(0.0), BinaryOp::Div).unwrap();
        assert_eq!(result, Value::Float(f64::INFINITY));
    }

    #[test]
    fn string_concat_and_compare() {
        assert_eq!(
            evaluate_binary(&Value::string("ab"), &Value::string("cd"), BinaryOp::Add),
            Ok(Value::string("abcd"))
        );
        assert_eq!(
            evaluate_binary(&Value::string("a"), &Value::string("b"), BinaryOp::Lt),
            Ok(Value::Bool(true))
        );
    }

    #[test]
    fn type_mismatch_is_error() {
        let err =
            evaluate_binary(&Value::Int(1), &Value::string("x"), BinaryOp::Add).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::BinaryTypeMismatch {
                op: BinaryOp::Add,
                lhs: "int",
                rhs: "string",
            }
        );
    }

    #[test]
    fn logic_requires_booleans() {
        let err = evaluate_binary(&Value::Int(1), &Value::Int(1), BinaryOp::And).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::InvalidBinaryOp {
                op: BinaryOp::And,
                type_name: "integers",
            }
        );
    }
}
