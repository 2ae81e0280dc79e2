//! Pratt parser for the scry expression grammar.
//!
//! Consumes the token slice of a single line and produces an [`Expr`].
//! There is no error recovery: the engine surfaces exactly one error per
//! evaluation cycle, so the first failure wins.

mod cursor;
mod error;

pub use error::{ParseError, ParseErrorKind};

use cursor::Cursor;
use scry_ir::{BinaryOp, Expr, ExprKind, Token, TokenKind, UnaryOp};

/// Binding power of a prefix operator's operand.
///
/// Tighter than `* / %`, looser than `**`, so `-a * b` is `(-a) * b` and
/// `-2 ** 2` is `-(2 ** 2)`.
const PREFIX_BP: u8 = 11;

/// Parse a whole line as one expression; every token must be consumed.
pub fn parse_expression(tokens: &[Token]) -> Result<Expr, ParseError> {
    let mut cursor = Cursor::new(tokens);
    let expr = expr_bp(&mut cursor, 0)?;
    match cursor.peek() {
        Some(token) => Err(ParseError::new(
            ParseErrorKind::TrailingTokens(token.kind.clone()),
            token.span,
        )),
        None => Ok(expr),
    }
}

/// Left/right binding powers for infix operators. The right power of `**`
/// is lower than its left power, making it right-associative.
fn infix_binding_power(op: BinaryOp) -> (u8, u8) {
    match op {
        BinaryOp::Or => (1, 2),
        BinaryOp::And => (3, 4),
        BinaryOp::Eq
        | BinaryOp::NotEq
        | BinaryOp::Lt
        | BinaryOp::LtEq
        | BinaryOp::Gt
        | BinaryOp::GtEq => (5, 6),
        BinaryOp::Add | BinaryOp::Sub => (7, 8),
        BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => (9, 10),
        BinaryOp::Pow => (14, 13),
    }
}

fn infix_op(kind: &TokenKind) -> Option<BinaryOp> {
    Some(match kind {
        TokenKind::OrOr => BinaryOp::Or,
        TokenKind::AndAnd => BinaryOp::And,
        TokenKind::EqEq => BinaryOp::Eq,
        TokenKind::NotEq => BinaryOp::NotEq,
        TokenKind::Lt => BinaryOp::Lt,
        TokenKind::LtEq => BinaryOp::LtEq,
        TokenKind::Gt => BinaryOp::Gt,
        TokenKind::GtEq => BinaryOp::GtEq,
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Sub,
        TokenKind::Star => BinaryOp::Mul,
        TokenKind::Slash => BinaryOp::Div,
        TokenKind::Percent => BinaryOp::Mod,
        TokenKind::StarStar => BinaryOp::Pow,
        _ => return None,
    })
}

fn expr_bp(cursor: &mut Cursor<'_>, min_bp: u8) -> Result<Expr, ParseError> {
    let mut lhs = prefix(cursor)?;

    while let Some(token) = cursor.peek() {
        let Some(op) = infix_op(&token.kind) else {
            break;
        };
        let (left_bp, right_bp) = infix_binding_power(op);
        if left_bp < min_bp {
            break;
        }
        cursor.bump();
        let rhs = expr_bp(cursor, right_bp)?;
        let span = lhs.span.to(rhs.span);
        lhs = Expr::new(
            ExprKind::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            },
            span,
        );
    }

    Ok(lhs)
}

fn prefix(cursor: &mut Cursor<'_>) -> Result<Expr, ParseError> {
    let Some(token) = cursor.bump() else {
        return Err(ParseError::new(ParseErrorKind::UnexpectedEnd, cursor.span()));
    };
    let span = token.span;
    match &token.kind {
        TokenKind::Int(n) => Ok(Expr::new(ExprKind::Int(*n), span)),
        TokenKind::Float(x) => Ok(Expr::new(ExprKind::Float(*x), span)),
        TokenKind::Str(s) => Ok(Expr::new(ExprKind::Str(s.clone()), span)),
        TokenKind::True => Ok(Expr::new(ExprKind::Bool(true), span)),
        TokenKind::False => Ok(Expr::new(ExprKind::Bool(false), span)),
        TokenKind::Ident(name) => {
            if cursor.peek().is_some_and(|t| t.kind == TokenKind::LParen) {
                call(cursor, name.clone(), span)
            } else {
                Ok(Expr::new(ExprKind::Ident(name.clone()), span))
            }
        }
        TokenKind::Minus => unary(cursor, UnaryOp::Neg, span),
        TokenKind::Bang => unary(cursor, UnaryOp::Not, span),
        TokenKind::LParen => {
            let inner = expr_bp(cursor, 0)?;
            if cursor.eat(&TokenKind::RParen) {
                Ok(inner)
            } else {
                Err(ParseError::new(ParseErrorKind::UnclosedParen, span))
            }
        }
        other => Err(ParseError::new(
            ParseErrorKind::UnexpectedToken(other.clone()),
            span,
        )),
    }
}

fn unary(cursor: &mut Cursor<'_>, op: UnaryOp, op_span: scry_ir::Span) -> Result<Expr, ParseError> {
    let operand = expr_bp(cursor, PREFIX_BP)?;
    let span = op_span.to(operand.span);
    Ok(Expr::new(
        ExprKind::Unary {
            op,
            operand: Box::new(operand),
        },
        span,
    ))
}

/// Parse a call's argument list; the callee identifier is already consumed
/// and the cursor sits on `(`.
fn call(cursor: &mut Cursor<'_>, callee: String, start: scry_ir::Span) -> Result<Expr, ParseError> {
    cursor.bump(); // (
    let mut args = Vec::new();
    let close = if let Some(span) = cursor.eat_span(&TokenKind::RParen) {
        span
    } else {
        loop {
            args.push(expr_bp(cursor, 0)?);
            if cursor.eat(&TokenKind::Comma) {
                continue;
            }
            if let Some(span) = cursor.eat_span(&TokenKind::RParen) {
                break span;
            }
            return Err(ParseError::new(ParseErrorKind::UnclosedParen, cursor.span()));
        }
    };
    Ok(Expr::new(ExprKind::Call { callee, args }, start.to(close)))
}
