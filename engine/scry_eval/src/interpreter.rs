//! Tree-walking interpreter for the scry grammar.
//!
//! One interpreter per evaluation cycle: it owns the (flat) environment,
//! seeds the builtin constants, and walks statements in order. Dropping it
//! drops every binding, which is what keeps cycles isolated.

use crate::builtins;
use crate::errors::{undefined_variable, unknown_function, EvalError, EvalResult};
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::{binary_type_mismatch, Environment, Value};
use scry_ir::{BinaryOp, Expr, ExprKind, Stmt};
use smallvec::SmallVec;

/// A single-cycle interpreter.
pub struct Interpreter {
    env: Environment,
}

impl Interpreter {
    /// Fresh interpreter with the builtin constants pre-bound.
    pub fn new() -> Self {
        let mut env = Environment::new();
        for (name, value) in builtins::CONSTANTS {
            env.define(name, Value::Float(value));
        }
        Interpreter { env }
    }

    /// Read access to the environment (the sandbox's collection step).
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Execute one statement: evaluate the expression, bind the result.
    pub fn exec_stmt(&mut self, stmt: &Stmt) -> Result<(), EvalError> {
        let value = self.eval_expr(&stmt.expr)?;
        self.env.define(stmt.name.clone(), value);
        Ok(())
    }

    /// Evaluate an expression against the current environment.
    pub fn eval_expr(&self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Int(n) => Ok(Value::Int(*n)),
            ExprKind::Float(x) => Ok(Value::Float(*x)),
            ExprKind::Str(s) => Ok(Value::Str(s.clone())),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Ident(name) => self
                .env
                .lookup(name)
                .cloned()
                .ok_or_else(|| undefined_variable(name).or_span(expr.span)),
            ExprKind::Unary { op, operand } => {
                let value = self.eval_expr(operand)?;
                evaluate_unary(&value, *op).map_err(|e| e.or_span(expr.span))
            }
            ExprKind::Binary { op, lhs, rhs } => match op {
                BinaryOp::And | BinaryOp::Or => self.eval_short_circuit(*op, lhs, rhs),
                _ => {
                    let left = self.eval_expr(lhs)?;
                    let right = self.eval_expr(rhs)?;
                    evaluate_binary(&left, &right, *op).map_err(|e| e.or_span(expr.span))
                }
            },
            ExprKind::Call { callee, args } => self.eval_call(callee, args, expr),
        }
    }

    /// `&&` and `||` evaluate the right side only when the left side has
    /// not already decided the answer.
    fn eval_short_circuit(&self, op: BinaryOp, lhs: &Expr, rhs: &Expr) -> EvalResult {
        let left = self.eval_expr(lhs)?;
        let Value::Bool(a) = left else {
            return Err(
                binary_type_mismatch(op, left.type_name(), "bool").or_span(lhs.span)
            );
        };
        match (op, a) {
            (BinaryOp::And, false) => Ok(Value::Bool(false)),
            (BinaryOp::Or, true) => Ok(Value::Bool(true)),
            _ => {
                let right = self.eval_expr(rhs)?;
                let Value::Bool(b) = right else {
                    return Err(
                        binary_type_mismatch(op, "bool", right.type_name()).or_span(rhs.span)
                    );
                };
                Ok(Value::Bool(b))
            }
        }
    }

    fn eval_call(&self, callee: &str, args: &[Expr], expr: &Expr) -> EvalResult {
        let builtin =
            builtins::lookup(callee).ok_or_else(|| unknown_function(callee).or_span(expr.span))?;
        let mut values: SmallVec<[Value; 2]> = SmallVec::with_capacity(args.len());
        for arg in args {
            values.push(self.eval_expr(arg)?);
        }
        builtin.call(&values).map_err(|e| e.or_span(expr.span))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EvalErrorKind;
    use pretty_assertions::assert_eq;

    fn eval(interp: &Interpreter, line: &str) -> EvalResult {
        let tokens = scry_lexer::lex(line).expect("lex failed");
        let expr = scry_parse::parse_expression(&tokens).expect("parse failed");
        interp.eval_expr(&expr)
    }

    fn stmt(name: &str, line: &str) -> Stmt {
        let tokens = scry_lexer::lex(line).expect("lex failed");
        let expr = scry_parse::parse_expression(&tokens).expect("parse failed");
        Stmt {
            name: name.to_string(),
            expr,
            line: 1,
        }
    }

    #[test]
    fn literals_and_arithmetic() {
        let interp = Interpreter::new();
        assert_eq!(eval(&interp, "2 + 3 * 4"), Ok(Value::Int(14)));
        assert_eq!(eval(&interp, "(2 + 3) * 4"), Ok(Value::Int(20)));
        assert_eq!(eval(&interp, "2 ** 3 ** 2"), Ok(Value::Int(512)));
    }

    #[test]
    fn statements_bind_and_chain() {
        let mut interp = Interpreter::new();
        interp.exec_stmt(&stmt("x", "2")).unwrap();
        interp.exec_stmt(&stmt("y", "x + 3")).unwrap();
        assert_eq!(interp.env().lookup("y"), Some(&Value::Int(5)));
    }

    #[test]
    fn undefined_variable_carries_span() {
        let interp = Interpreter::new();
        let err = eval(&interp, "1 + nope").unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::UndefinedVariable("nope".into()));
        assert!(err.span.is_some());
    }

    #[test]
    fn constants_are_seeded_and_shadowable() {
        let mut interp = Interpreter::new();
        assert_eq!(
            eval(&interp, "pi"),
            Ok(Value::Float(std::f64::consts::PI))
        );
        interp.exec_stmt(&stmt("pi", "3")).unwrap();
        assert_eq!(eval(&interp, "pi"), Ok(Value::Int(3)));
    }

    #[test]
    fn builtin_calls() {
        let interp = Interpreter::new();
        assert_eq!(eval(&interp, "sqrt(16)"), Ok(Value::Float(4.0)));
        assert_eq!(eval(&interp, "max(2, 7)"), Ok(Value::Int(7)));
    }

    #[test]
    fn unknown_function_is_error() {
        let interp = Interpreter::new();
        let err = eval(&interp, "mystery(1)").unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::UnknownFunction("mystery".into()));
    }

    #[test]
    fn short_circuit_skips_rhs() {
        let interp = Interpreter::new();
        // The right side would fail with division by zero if evaluated.
        assert_eq!(eval(&interp, "false && 1 / 0 == 0"), Ok(Value::Bool(false)));
        assert_eq!(eval(&interp, "true || 1 / 0 == 0"), Ok(Value::Bool(true)));
    }

    #[test]
    fn logic_operand_type_errors() {
        let interp = Interpreter::new();
        let err = eval(&interp, "1 && true").unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::BinaryTypeMismatch { .. }));
        let err = eval(&interp, "true && 1").unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::BinaryTypeMismatch { .. }));
    }

    #[test]
    fn division_by_zero_propagates() {
        let interp = Interpreter::new();
        let err = eval(&interp, "1 / 0").unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    }
}
