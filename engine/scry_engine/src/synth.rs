//! Statement synthesis: classify lines and assemble the routine.
//!
//! Every non-blank line becomes an assignment statement: named lines keep
//! the user's identifier, anonymous lines bind to a synthetic per-line
//! name. Blank lines emit nothing but still consume their 1-based index
//! slot, so references and synthetic keys stay stable when blank lines are
//! inserted elsewhere.

use rustc_hash::FxHashSet;
use scry_eval::EvalError;
use scry_ir::{Expr, Stmt, Token, TokenKind};

/// The synthetic environment name for line `index`'s anonymous binding.
pub(crate) fn synthetic_name(index: &str) -> String {
    format!("__line_{index}")
}

/// The assembled routine: an ordered statement body plus the trailing
/// collection plan mapping report keys to environment names, in strict
/// first-appearance order.
#[derive(Clone, Debug)]
pub struct Routine {
    pub(crate) stmts: Vec<Stmt>,
    pub(crate) collect: Vec<CollectEntry>,
}

#[derive(Clone, Debug)]
pub(crate) struct CollectEntry {
    /// Key shown in the report: a user identifier, or the bare line index
    /// for anonymous lines.
    pub(crate) key: String,
    /// Environment name to read at the end of the run.
    pub(crate) name: String,
}

impl Routine {
    /// Number of statements in the body.
    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}

/// One classified line.
pub(crate) enum Classified {
    Blank,
    Named { name: String, expr: Expr },
    Anon { expr: Expr },
}

/// Lex and classify a single line.
///
/// A line whose first two tokens are an identifier and `=` is a named
/// assignment; everything else that lexes is an anonymous expression.
/// Digit-only assignment targets cannot arise: the lexer has no
/// digit-leading identifiers, so `3 = 5` classifies as anonymous and then
/// fails in the parser like any other malformed expression.
pub(crate) fn classify(line: &str) -> Result<Classified, EvalError> {
    let tokens = scry_lexer::lex(line).map_err(|e| EvalError::new(e.to_string()))?;
    if tokens.is_empty() {
        return Ok(Classified::Blank);
    }
    if let [Token { kind: TokenKind::Ident(name), .. }, Token { kind: TokenKind::Assign, .. }, rest @ ..] =
        tokens.as_slice()
    {
        let expr = parse(rest)?;
        return Ok(Classified::Named {
            name: name.clone(),
            expr,
        });
    }
    Ok(Classified::Anon {
        expr: parse(&tokens)?,
    })
}

fn parse(tokens: &[Token]) -> Result<Expr, EvalError> {
    scry_parse::parse_expression(tokens).map_err(|e| EvalError::new(e.to_string()))
}

/// Consume the rewritten script text and assemble the routine.
///
/// The first lex or parse failure aborts synthesis; the engine reports a
/// single error per cycle.
pub fn synthesize(text: &str) -> Result<Routine, EvalError> {
    let mut stmts = Vec::new();
    let mut collect = Vec::new();
    let mut seen: FxHashSet<String> = FxHashSet::default();

    for (index, line) in (1u32..).zip(text.lines()) {
        let (key, name, expr) = match classify(line)
            .map_err(|e| EvalError::new(format!("line {index}: {e}")))?
        {
            Classified::Blank => continue,
            Classified::Named { name, expr } => (name.clone(), name, expr),
            Classified::Anon { expr } => {
                (index.to_string(), synthetic_name(&index.to_string()), expr)
            }
        };
        stmts.push(Stmt {
            name: name.clone(),
            expr,
            line: index,
        });
        if seen.insert(name.clone()) {
            collect.push(CollectEntry { key, name });
        }
    }

    Ok(Routine { stmts, collect })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn keys(routine: &Routine) -> Vec<&str> {
        routine.collect.iter().map(|e| e.key.as_str()).collect()
    }

    #[test]
    fn named_lines_keep_identifier() {
        let routine = synthesize("x = 2\ny = x + 3").unwrap();
        assert_eq!(routine.len(), 2);
        assert_eq!(keys(&routine), vec!["x", "y"]);
        assert_eq!(routine.stmts[0].name, "x");
        assert_eq!(routine.stmts[1].line, 2);
    }

    #[test]
    fn anonymous_lines_get_line_index_keys() {
        let routine = synthesize("1 + 2\n3 * 4").unwrap();
        assert_eq!(keys(&routine), vec!["1", "2"]);
        assert_eq!(routine.stmts[0].name, "__line_1");
        assert_eq!(routine.stmts[1].name, "__line_2");
    }

    #[test]
    fn blank_lines_keep_index_slots() {
        let routine = synthesize("1 + 2\n\n3 * 4").unwrap();
        assert_eq!(keys(&routine), vec!["1", "3"]);
        assert_eq!(routine.stmts[1].name, "__line_3");
    }

    #[test]
    fn whitespace_only_lines_are_blank() {
        let routine = synthesize("   \t  \n7").unwrap();
        assert_eq!(keys(&routine), vec!["2"]);
    }

    #[test]
    fn duplicate_keys_keep_first_position() {
        let routine = synthesize("x = 1\ny = 2\nx = 3").unwrap();
        // Three statements run, but x is collected once, in first position.
        assert_eq!(routine.len(), 3);
        assert_eq!(keys(&routine), vec!["x", "y"]);
    }

    #[test]
    fn comparison_line_is_anonymous() {
        // `x == 3` must not classify as an assignment to x.
        let routine = synthesize("x = 1\nx == 3").unwrap();
        assert_eq!(keys(&routine), vec!["x", "2"]);
    }

    #[test]
    fn digit_assignment_target_fails_as_expression() {
        let err = synthesize("3 = 5").unwrap_err();
        assert!(err.to_string().starts_with("line 1:"));
    }

    #[test]
    fn lex_error_carries_line_number() {
        let err = synthesize("1 + 1\nx = @").unwrap_err();
        assert_eq!(err.to_string(), "line 2: unexpected character `@`");
    }

    #[test]
    fn empty_script_yields_empty_routine() {
        let routine = synthesize("").unwrap();
        assert!(routine.is_empty());
        assert!(routine.collect.is_empty());
    }

    #[test]
    fn assignment_with_missing_rhs_is_an_error() {
        let err = synthesize("x =").unwrap_err();
        assert_eq!(err.to_string(), "line 1: expected an expression");
    }
}
