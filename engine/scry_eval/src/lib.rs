//! Evaluator for the scry expression grammar.
//!
//! This crate provides the sandboxed half of the engine: runtime [`Value`]s,
//! the per-cycle [`Environment`], direct enum-based operator dispatch, the
//! builtin math table, and the [`Interpreter`] that walks statements.
//!
//! Nothing here touches the filesystem, the network, or global state; the
//! only effects an evaluated script can have are bindings in the
//! environment the caller owns.

mod builtins;
mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod unary_operators;
mod value;

pub use builtins::{lookup as lookup_builtin, Builtin, CONSTANTS};
pub use environment::Environment;
pub use errors::{
    binary_type_mismatch, division_by_zero, integer_overflow, invalid_binary_op, modulo_by_zero,
    unary_type_mismatch, undefined_variable, unknown_function, wrong_arg_count, wrong_arg_type,
    EvalError, EvalErrorKind, EvalResult,
};
pub use interpreter::Interpreter;
pub use operators::evaluate_binary;
pub use unary_operators::evaluate_unary;
pub use value::Value;
