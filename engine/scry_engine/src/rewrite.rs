//! Cross-line reference token rewriting.
//!
//! `${N}` (canonical) and `$N` (compatibility alias) refer to the value of
//! line N's anonymous binding. Both rewrite to the synthetic identifier
//! that line N's statement is bound under, so which literal form the user
//! types never affects the result. The rewrite runs over the whole script
//! text before line splitting, so a reference can sit anywhere — including
//! inside a named assignment's right-hand side.

use crate::synth::synthetic_name;

/// Rewrite every cross-line reference token in `text`.
///
/// Pure text transform. Anything after `$` that is not a digit run or a
/// braced digit run stays verbatim: `$x`, `$-3`, `${3x}`, `${}`, and a
/// trailing lone `$` are not references.
pub fn rewrite_refs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        // Attempt both forms on a lookahead clone; commit only on a full
        // match, otherwise the `$` and whatever follows stay untouched.
        let mut probe = chars.clone();
        let matched = match probe.peek() {
            Some('{') => {
                probe.next();
                let digits = take_digits(&mut probe);
                if !digits.is_empty() && probe.peek() == Some(&'}') {
                    probe.next();
                    Some(digits)
                } else {
                    None
                }
            }
            Some(d) if d.is_ascii_digit() => Some(take_digits(&mut probe)),
            _ => None,
        };
        match matched {
            Some(digits) => {
                tracing::trace!(line = %digits, "rewriting cross-line reference");
                out.push_str(&synthetic_name(&digits));
                chars = probe;
            }
            None => out.push('$'),
        }
    }
    out
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(d) = chars.peek().filter(|d| d.is_ascii_digit()) {
        digits.push(*d);
        chars.next();
    }
    digits
}
