//! Evaluation error type and factory functions.
//!
//! Every failure mode of the sandbox funnels into [`EvalError`]; the engine
//! collapses it into the report's single reserved `error` entry. Factory
//! functions construct the common cases so call sites stay terse.

use scry_ir::{BinaryOp, Span, UnaryOp};
use std::fmt;

/// Result alias for evaluation.
pub type EvalResult<T = crate::Value> = Result<T, EvalError>;

/// Evaluation error.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalError {
    /// WHAT went wrong.
    pub kind: EvalErrorKind,
    /// WHERE in the line it went wrong, when known.
    pub span: Option<Span>,
}

impl EvalError {
    /// Create an error with a free-form message.
    ///
    /// Prefer the specific factory functions when a structured kind exists;
    /// this is the escape hatch the engine uses to wrap lex/parse failures.
    pub fn new(message: impl Into<String>) -> Self {
        EvalError {
            kind: EvalErrorKind::Custom(message.into()),
            span: None,
        }
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    /// Attach a span if none is set yet. The innermost location wins.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }
}

/// What kind of evaluation error occurred.
#[derive(Clone, Debug, PartialEq)]
pub enum EvalErrorKind {
    DivisionByZero,
    ModuloByZero,
    /// Checked i64 arithmetic overflowed; carries the operation name.
    IntegerOverflow(&'static str),
    /// Operands of incompatible types for a binary operator.
    BinaryTypeMismatch {
        op: BinaryOp,
        lhs: &'static str,
        rhs: &'static str,
    },
    /// Operator not supported for this (matching) operand type.
    InvalidBinaryOp {
        op: BinaryOp,
        type_name: &'static str,
    },
    /// Operand of the wrong type for a unary operator.
    UnaryTypeMismatch {
        op: UnaryOp,
        operand: &'static str,
    },
    UndefinedVariable(String),
    UnknownFunction(String),
    WrongArgCount {
        name: &'static str,
        expected: usize,
        got: usize,
    },
    WrongArgType {
        name: &'static str,
        expected: &'static str,
        got: &'static str,
    },
    Custom(String),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            EvalErrorKind::DivisionByZero => write!(f, "division by zero"),
            EvalErrorKind::ModuloByZero => write!(f, "modulo by zero"),
            EvalErrorKind::IntegerOverflow(op) => write!(f, "integer overflow in {op}"),
            EvalErrorKind::BinaryTypeMismatch { op, lhs, rhs } => {
                write!(f, "cannot apply `{op}` to {lhs} and {rhs}")
            }
            EvalErrorKind::InvalidBinaryOp { op, type_name } => {
                write!(f, "operator `{op}` is not supported for {type_name}")
            }
            EvalErrorKind::UnaryTypeMismatch { op, operand } => {
                write!(f, "cannot apply unary `{op}` to {operand}")
            }
            EvalErrorKind::UndefinedVariable(name) => {
                write!(f, "undefined variable `{name}`")
            }
            EvalErrorKind::UnknownFunction(name) => {
                write!(f, "unknown function `{name}`")
            }
            EvalErrorKind::WrongArgCount {
                name,
                expected,
                got,
            } => {
                write!(f, "`{name}` expects {expected} argument(s), got {got}")
            }
            EvalErrorKind::WrongArgType {
                name,
                expected,
                got,
            } => {
                write!(f, "`{name}` expects {expected}, got {got}")
            }
            EvalErrorKind::Custom(message) => f.write_str(message),
        }
    }
}

// Factory functions

pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

pub fn integer_overflow(op: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow(op))
}

pub fn binary_type_mismatch(op: BinaryOp, lhs: &'static str, rhs: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BinaryTypeMismatch { op, lhs, rhs })
}

pub fn invalid_binary_op(op: BinaryOp, type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidBinaryOp { op, type_name })
}

pub fn unary_type_mismatch(op: UnaryOp, operand: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnaryTypeMismatch { op, operand })
}

pub fn undefined_variable(name: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable(name.into()))
}

pub fn unknown_function(name: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownFunction(name.into()))
}

pub fn wrong_arg_count(name: &'static str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongArgCount {
        name,
        expected,
        got,
    })
}

pub fn wrong_arg_type(name: &'static str, expected: &'static str, got: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongArgType {
        name,
        expected,
        got,
    })
}
