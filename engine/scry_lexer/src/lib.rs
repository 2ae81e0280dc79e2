//! Lexer for the scry expression grammar, built on logos.
//!
//! The input is always a single physical line of the script (the statement
//! synthesizer splits the text before lexing), so spans are byte offsets
//! into that line and there is no newline handling here.

mod lex_error;
mod raw_token;

pub use lex_error::{LexError, LexErrorKind};

use logos::Logos;
use raw_token::RawToken;
use scry_ir::{Span, Token, TokenKind};

/// Lex one line into tokens.
///
/// Returns the first lexical error encountered; the engine reports a single
/// error per cycle, so there is no recovery or multi-error collection.
pub fn lex(line: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    for (result, range) in RawToken::lexer(line).spanned() {
        let span = Span::from_range(range.clone());
        match result {
            Ok(raw) => tokens.push(Token::new(convert(raw, &line[range], span)?, span)),
            Err(()) => {
                let c = line[range].chars().next().unwrap_or('\u{FFFD}');
                return Err(LexError::new(LexErrorKind::UnknownChar(c), span));
            }
        }
    }
    Ok(tokens)
}

/// Convert a raw token to a `TokenKind`, parsing literal payloads.
fn convert(raw: RawToken, slice: &str, span: Span) -> Result<TokenKind, LexError> {
    Ok(match raw {
        RawToken::Int => {
            let digits = slice.replace('_', "");
            let value = digits
                .parse::<i64>()
                .map_err(|_| LexError::new(LexErrorKind::IntOverflow, span))?;
            TokenKind::Int(value)
        }
        RawToken::Float => {
            let digits = slice.replace('_', "");
            let value = digits
                .parse::<f64>()
                .map_err(|_| LexError::new(LexErrorKind::InvalidFloat, span))?;
            TokenKind::Float(value)
        }
        RawToken::Str => {
            let content = &slice[1..slice.len() - 1];
            TokenKind::Str(unescape(content, span)?)
        }
        RawToken::UnterminatedStr => {
            return Err(LexError::new(LexErrorKind::UnterminatedString, span));
        }
        RawToken::Ident => TokenKind::Ident(slice.to_string()),
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::Assign => TokenKind::Assign,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::StarStar => TokenKind::StarStar,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::AndAnd => TokenKind::AndAnd,
        RawToken::OrOr => TokenKind::OrOr,
        RawToken::Bang => TokenKind::Bang,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Comma => TokenKind::Comma,
    })
}

/// Resolve string escapes: `\n \t \r \\ \"`.
fn unescape(content: &str, span: Span) -> Result<String, LexError> {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some(other) => return Err(LexError::new(LexErrorKind::InvalidEscape(other), span)),
            // Trailing backslash cannot occur: the raw regex requires a
            // character after every `\` inside the quotes.
            None => return Err(LexError::new(LexErrorKind::UnterminatedString, span)),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(line: &str) -> Vec<TokenKind> {
        lex(line)
            .expect("lex failed")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn lex_assignment() {
        assert_eq!(
            kinds("x = 2 + 3"),
            vec![
                TokenKind::Ident("x".into()),
                TokenKind::Assign,
                TokenKind::Int(2),
                TokenKind::Plus,
                TokenKind::Int(3),
            ]
        );
    }

    #[test]
    fn lex_floats_and_exponents() {
        assert_eq!(
            kinds("3.14 1e-3 2.5e8 1_000.5"),
            vec![
                TokenKind::Float(3.14),
                TokenKind::Float(1e-3),
                TokenKind::Float(2.5e8),
                TokenKind::Float(1000.5),
            ]
        );
    }

    #[test]
    fn lex_int_with_separators() {
        assert_eq!(kinds("1_000_000"), vec![TokenKind::Int(1_000_000)]);
    }

    #[test]
    fn lex_power_is_one_token() {
        assert_eq!(
            kinds("2 ** 3"),
            vec![TokenKind::Int(2), TokenKind::StarStar, TokenKind::Int(3)]
        );
    }

    #[test]
    fn lex_comparisons() {
        assert_eq!(
            kinds("a == b != c <= d"),
            vec![
                TokenKind::Ident("a".into()),
                TokenKind::EqEq,
                TokenKind::Ident("b".into()),
                TokenKind::NotEq,
                TokenKind::Ident("c".into()),
                TokenKind::LtEq,
                TokenKind::Ident("d".into()),
            ]
        );
    }

    #[test]
    fn lex_string_escapes() {
        assert_eq!(
            kinds(r#""a\nb" "q\"q""#),
            vec![
                TokenKind::Str("a\nb".into()),
                TokenKind::Str("q\"q".into()),
            ]
        );
    }

    #[test]
    fn lex_keywords_not_idents() {
        assert_eq!(
            kinds("true falsey false"),
            vec![
                TokenKind::True,
                TokenKind::Ident("falsey".into()),
                TokenKind::False,
            ]
        );
    }

    #[test]
    fn lex_synthetic_identifier() {
        assert_eq!(kinds("__line_3"), vec![TokenKind::Ident("__line_3".into())]);
    }

    #[test]
    fn unknown_char_is_error() {
        let err = lex("a $ b").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnknownChar('$'));
        assert_eq!(err.span, Span::new(2, 3));
    }

    #[test]
    fn unterminated_string_is_error() {
        let err = lex(r#"x = "oops"#).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    }

    #[test]
    fn int_overflow_is_error() {
        let err = lex("99999999999999999999").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::IntOverflow);
    }

    #[test]
    fn bad_escape_is_error() {
        let err = lex(r#""\q""#).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::InvalidEscape('q'));
    }

    #[test]
    fn empty_line_lexes_to_nothing() {
        assert_eq!(lex("   "), Ok(vec![]));
    }
}
