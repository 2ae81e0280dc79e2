//! Runtime values.

use std::fmt;

/// A scry runtime value.
///
/// The type set is deliberately small: the grammar has no collections,
/// functions-as-values, or user types, so the evaluator can use direct
/// enum dispatch throughout.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
}

impl Value {
    /// Factory for string values.
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// The value's type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Bool(_) => "bool",
        }
    }

    /// Numeric view, promoting ints. `None` for strings and bools.
    #[inline]
    #[expect(
        clippy::cast_precision_loss,
        reason = "numeric promotion is the grammar's defined semantics"
    )]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// Natural textual representation. Strings display bare (the report is
    /// for humans, not for re-parsing); floats use the shortest form here —
    /// the precision-aware rendering lives in the engine's formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}
