//! Sandboxed execution of prelude + synthesized routine.
//!
//! One fresh interpreter per call: the prelude's statements run first, the
//! routine's statements after, all in the same flat environment; then the
//! collection plan is read back. Everything is dropped on return — nothing
//! survives to the next cycle.

use crate::synth::Routine;
use scry_eval::{undefined_variable, EvalError, Interpreter, Value};

/// Run the routine against a fresh execution context.
///
/// Returns the ordered `(key, value)` bindings, or the first failure
/// anywhere in prelude or routine as a single error. An empty routine with
/// a well-formed prelude yields an empty binding list.
pub fn run(routine: &Routine, prelude: &str) -> Result<Vec<(String, Value)>, EvalError> {
    let mut interp = Interpreter::new();

    run_prelude(&mut interp, prelude)?;

    for stmt in &routine.stmts {
        interp
            .exec_stmt(stmt)
            .map_err(|e| EvalError::new(format!("line {}: {e}", stmt.line)))?;
    }

    routine
        .collect
        .iter()
        .map(|entry| {
            // Every collected name was assigned by a statement that ran to
            // completion, so the lookup only fails if that invariant breaks.
            interp
                .env()
                .lookup(&entry.name)
                .cloned()
                .map(|value| (entry.key.clone(), value))
                .ok_or_else(|| undefined_variable(&entry.name))
        })
        .collect()
}

/// Run the prelude's statements: named lines bind, anonymous lines
/// evaluate and discard. The prelude contributes no report entries.
fn run_prelude(interp: &mut Interpreter, prelude: &str) -> Result<(), EvalError> {
    use crate::synth::{classify, Classified};
    use scry_ir::Stmt;

    for (index, line) in (1u32..).zip(prelude.lines()) {
        let tag = |e: EvalError| EvalError::new(format!("prelude line {index}: {e}"));
        match classify(line).map_err(tag)? {
            Classified::Blank => {}
            Classified::Named { name, expr } => {
                interp
                    .exec_stmt(&Stmt {
                        name,
                        expr,
                        line: index,
                    })
                    .map_err(tag)?;
            }
            Classified::Anon { expr } => {
                interp.eval_expr(&expr).map_err(tag)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::synthesize;
    use pretty_assertions::assert_eq;

    fn run_script(script: &str, prelude: &str) -> Result<Vec<(String, Value)>, EvalError> {
        run(&synthesize(script).unwrap(), prelude)
    }

    #[test]
    fn bindings_in_order() {
        let bindings = run_script("x = 2\ny = x + 3", "").unwrap();
        assert_eq!(
            bindings,
            vec![
                ("x".to_string(), Value::Int(2)),
                ("y".to_string(), Value::Int(5)),
            ]
        );
    }

    #[test]
    fn later_lines_see_earlier_bindings_by_synthetic_name() {
        let bindings = run_script("5\n__line_1 + 1", "").unwrap();
        assert_eq!(
            bindings,
            vec![
                ("1".to_string(), Value::Int(5)),
                ("2".to_string(), Value::Int(6)),
            ]
        );
    }

    #[test]
    fn prelude_bindings_are_ambient_but_unreported() {
        let bindings = run_script("r2 = radius * radius", "radius = 3").unwrap();
        assert_eq!(bindings, vec![("r2".to_string(), Value::Int(9))]);
    }

    #[test]
    fn anonymous_prelude_lines_evaluate_and_discard() {
        // A failing anonymous prelude line still fails the run.
        let err = run_script("1", "1 / 0").unwrap_err();
        assert_eq!(err.to_string(), "prelude line 1: division by zero");
        // A succeeding one leaves no trace.
        let bindings = run_script("7", "2 + 2").unwrap();
        assert_eq!(bindings, vec![("1".to_string(), Value::Int(7))]);
    }

    #[test]
    fn runtime_error_carries_script_line() {
        let err = run_script("x = 1\ny = x / 0", "").unwrap_err();
        assert_eq!(err.to_string(), "line 2: division by zero");
    }

    #[test]
    fn rebinding_reports_last_value_under_first_key_position() {
        let bindings = run_script("x = 1\nx = x + 10", "").unwrap();
        assert_eq!(bindings, vec![("x".to_string(), Value::Int(11))]);
    }

    #[test]
    fn empty_routine_is_empty_not_error() {
        let bindings = run_script("", "").unwrap();
        assert!(bindings.is_empty());
    }

    #[test]
    fn consecutive_runs_share_nothing() {
        let first = run_script("leak = 42", "");
        assert!(first.is_ok());
        let err = run_script("leak + 1", "").unwrap_err();
        assert_eq!(err.to_string(), "line 1: undefined variable `leak`");
    }
}
