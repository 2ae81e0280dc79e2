//! Builtin math functions and constants.
//!
//! The builtin surface is the engine's replacement for "numeric-library
//! imports": a fixed table of math functions, plus the constants `pi`, `e`,
//! and `tau` pre-bound into every fresh environment (shadowable by user
//! assignments).

use crate::errors::{integer_overflow, wrong_arg_count, wrong_arg_type, EvalError, EvalResult};
use crate::operators::evaluate_binary;
use crate::Value;
use scry_ir::BinaryOp;

/// A builtin function: fixed name, fixed arity, pure.
pub struct Builtin {
    pub name: &'static str,
    pub arity: usize,
    func: fn(&[Value]) -> EvalResult,
}

impl Builtin {
    /// Invoke with arity checking.
    pub fn call(&self, args: &[Value]) -> EvalResult {
        if args.len() != self.arity {
            return Err(wrong_arg_count(self.name, self.arity, args.len()));
        }
        (self.func)(args)
    }
}

/// Look up a builtin by name.
pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|b| b.name == name)
}

/// Builtin constants seeded into every fresh environment.
pub const CONSTANTS: [(&str, f64); 3] = [
    ("pi", std::f64::consts::PI),
    ("e", std::f64::consts::E),
    ("tau", std::f64::consts::TAU),
];

fn num_arg(name: &'static str, value: &Value) -> Result<f64, EvalError> {
    value
        .as_f64()
        .ok_or_else(|| wrong_arg_type(name, "a number", value.type_name()))
}

/// Float result of a rounding-family builtin, collapsed to an int when it
/// fits; beyond the i64 range the float is already integral, so nothing is
/// lost by leaving it as a float.
#[expect(clippy::cast_precision_loss, reason = "bounds check before cast")]
#[expect(clippy::cast_possible_truncation, reason = "value is integral and in range")]
fn to_int_value(x: f64) -> Value {
    if x.is_finite() && x >= i64::MIN as f64 && x <= i64::MAX as f64 {
        Value::Int(x as i64)
    } else {
        Value::Float(x)
    }
}

macro_rules! float_builtin {
    ($fn_name:ident, $name:literal, $method:ident) => {
        fn $fn_name(args: &[Value]) -> EvalResult {
            Ok(Value::Float(num_arg($name, &args[0])?.$method()))
        }
    };
}

float_builtin!(builtin_sqrt, "sqrt", sqrt);
float_builtin!(builtin_sin, "sin", sin);
float_builtin!(builtin_cos, "cos", cos);
float_builtin!(builtin_tan, "tan", tan);
float_builtin!(builtin_ln, "ln", ln);
float_builtin!(builtin_log10, "log10", log10);
float_builtin!(builtin_exp, "exp", exp);

fn builtin_abs(args: &[Value]) -> EvalResult {
    match &args[0] {
        Value::Int(n) => n
            .checked_abs()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("abs")),
        other => Ok(Value::Float(num_arg("abs", other)?.abs())),
    }
}

fn builtin_floor(args: &[Value]) -> EvalResult {
    Ok(to_int_value(num_arg("floor", &args[0])?.floor()))
}

fn builtin_ceil(args: &[Value]) -> EvalResult {
    Ok(to_int_value(num_arg("ceil", &args[0])?.ceil()))
}

fn builtin_round(args: &[Value]) -> EvalResult {
    Ok(to_int_value(num_arg("round", &args[0])?.round()))
}

fn builtin_min(args: &[Value]) -> EvalResult {
    binary_extremum("min", args, |a, b| a <= b)
}

fn builtin_max(args: &[Value]) -> EvalResult {
    binary_extremum("max", args, |a, b| a >= b)
}

/// Pick one of two numeric arguments. Two ints stay an int; any float in
/// the pair promotes the comparison (and the result) to float.
fn binary_extremum(
    name: &'static str,
    args: &[Value],
    keep_first: fn(f64, f64) -> bool,
) -> EvalResult {
    let a = num_arg(name, &args[0])?;
    let b = num_arg(name, &args[1])?;
    if let (Value::Int(_), Value::Int(_)) = (&args[0], &args[1]) {
        return Ok(if keep_first(a, b) {
            args[0].clone()
        } else {
            args[1].clone()
        });
    }
    Ok(Value::Float(if keep_first(a, b) { a } else { b }))
}

fn builtin_pow(args: &[Value]) -> EvalResult {
    evaluate_binary(&args[0], &args[1], BinaryOp::Pow)
}

static BUILTINS: &[Builtin] = &[
    Builtin { name: "sqrt", arity: 1, func: builtin_sqrt },
    Builtin { name: "abs", arity: 1, func: builtin_abs },
    Builtin { name: "sin", arity: 1, func: builtin_sin },
    Builtin { name: "cos", arity: 1, func: builtin_cos },
    Builtin { name: "tan", arity: 1, func: builtin_tan },
    Builtin { name: "ln", arity: 1, func: builtin_ln },
    Builtin { name: "log10", arity: 1, func: builtin_log10 },
    Builtin { name: "exp", arity: 1, func: builtin_exp },
    Builtin { name: "floor", arity: 1, func: builtin_floor },
    Builtin { name: "ceil", arity: 1, func: builtin_ceil },
    Builtin { name: "round", arity: 1, func: builtin_round },
    Builtin { name: "min", arity: 2, func: builtin_min },
    Builtin { name: "max", arity: 2, func: builtin_max },
    Builtin { name: "pow", arity: 2, func: builtin_pow },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EvalErrorKind;
    use pretty_assertions::assert_eq;

    fn call(name: &str, args: &[Value]) -> EvalResult {
        lookup(name).expect("builtin not found").call(args)
    }

    #[test]
    fn sqrt_of_int_promotes() {
        assert_eq!(call("sqrt", &[Value::Int(9)]), Ok(Value::Float(3.0)));
    }

    #[test]
    fn abs_keeps_int() {
        assert_eq!(call("abs", &[Value::Int(-4)]), Ok(Value::Int(4)));
        assert_eq!(call("abs", &[Value::Float(-2.5)]), Ok(Value::Float(2.5)));
    }

    #[test]
    fn rounding_family_yields_ints() {
        assert_eq!(call("floor", &[Value::Float(3.7)]), Ok(Value::Int(3)));
        assert_eq!(call("ceil", &[Value::Float(3.2)]), Ok(Value::Int(4)));
        assert_eq!(call("round", &[Value::Float(3.5)]), Ok(Value::Int(4)));
    }

    #[test]
    fn min_max_preserve_int_pairs() {
        assert_eq!(
            call("min", &[Value::Int(3), Value::Int(7)]),
            Ok(Value::Int(3))
        );
        assert_eq!(
            call("max", &[Value::Int(3), Value::Float(7.5)]),
            Ok(Value::Float(7.5))
        );
    }

    #[test]
    fn pow_matches_operator() {
        assert_eq!(
            call("pow", &[Value::Int(2), Value::Int(8)]),
            Ok(Value::Int(256))
        );
    }

    #[test]
    fn arity_is_checked() {
        let err = call("sqrt", &[]).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::WrongArgCount {
                name: "sqrt",
                expected: 1,
                got: 0,
            }
        );
    }

    #[test]
    fn argument_types_are_checked() {
        let err = call("sqrt", &[Value::string("x")]).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::WrongArgType {
                name: "sqrt",
                expected: "a number",
                got: "string",
            }
        );
    }

    #[test]
    fn unknown_builtin_is_none() {
        assert!(lookup("frobnicate").is_none());
    }
}
