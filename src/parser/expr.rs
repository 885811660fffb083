use crate::{
    ast::{
        ast::Expr,
        expressions::{Identifier, InfixExpr, IntegerLiteral, PrefixExpr},
    },
    errors::errors::ErrorImpl,
    lexer::{stream::TokenStream, tokens::TokenKind},
};

use super::{
    lookups::{infix_handler, precedence, prefix_handler, Precedence},
    parser::Parser,
};

/// Precedence climbing over the current token.
///
/// `None` means the expression could not be built. The matching diagnostic
/// has been recorded and every token the expression spans is consumed.
pub fn parse_expr<S: TokenStream>(parser: &mut Parser<S>, min: Precedence) -> Option<Expr> {
    if !parser.enter() {
        // Drop the rest of the expression as one unit.
        while !parser.peek_is(TokenKind::Semicolon) && !parser.peek_is(TokenKind::EOF) {
            parser.advance();
        }
        return None;
    }

    let left = parse_expr_inner(parser, min);
    parser.leave();

    left
}

fn parse_expr_inner<S: TokenStream>(parser: &mut Parser<S>, min: Precedence) -> Option<Expr> {
    let kind = parser.current_token_kind();
    let Some(prefix) = prefix_handler::<S>(kind) else {
        parser.push_error(ErrorImpl::MissingPrefixHandler { kind }, parser.get_position());
        return None;
    };

    let mut left = prefix(parser);

    while !parser.peek_is(TokenKind::Semicolon) && min < precedence(parser.peek_token_kind()) {
        let Some(infix) = infix_handler::<S>(parser.peek_token_kind()) else {
            return left;
        };

        parser.advance();
        left = infix(parser, left);
    }

    left
}

pub fn parse_identifier<S: TokenStream>(parser: &mut Parser<S>) -> Option<Expr> {
    Some(Expr::Identifier(Identifier::from(parser.current_token().clone())))
}

pub fn parse_integer_literal<S: TokenStream>(parser: &mut Parser<S>) -> Option<Expr> {
    let token = parser.current_token().clone();

    match parse_integer(&token.value) {
        Some(value) => Some(Expr::Integer(IntegerLiteral { token, value })),
        None => {
            parser.push_error(
                ErrorImpl::IntegerParseError {
                    literal: token.value,
                },
                token.span.start,
            );
            None
        }
    }
}

/// Converts integer source text, honouring an optional sign followed by
/// `0x`, `0o`, `0b` or a bare leading `0` (octal) base prefix.
pub fn parse_integer(text: &str) -> Option<i64> {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.strip_prefix('+').unwrap_or(text)),
    };

    let prefixed = |prefixes: [&str; 2]| prefixes.iter().find_map(|p| unsigned.strip_prefix(p));

    let (digits, radix) = if let Some(digits) = prefixed(["0x", "0X"]) {
        (digits, 16)
    } else if let Some(digits) = prefixed(["0o", "0O"]) {
        (digits, 8)
    } else if let Some(digits) = prefixed(["0b", "0B"]) {
        (digits, 2)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (&unsigned[1..], 8)
    } else {
        (unsigned, 10)
    };

    // Only one sign, and only in front of the prefix.
    if digits.starts_with(['+', '-']) {
        return None;
    }

    // The sign stays attached so `i64::MIN` still fits.
    i64::from_str_radix(&format!("{}{}", sign, digits), radix).ok()
}

pub fn parse_prefix_expr<S: TokenStream>(parser: &mut Parser<S>) -> Option<Expr> {
    let token = parser.current_token().clone();
    parser.advance();

    // Unary operators bind tighter than any binary operator.
    let right = parse_expr(parser, Precedence::Prefix)?;

    Some(Expr::Prefix(PrefixExpr {
        operator: token.value.clone(),
        token,
        right: Box::new(right),
    }))
}

/// Builds `left <op> right` with the operator as the current token.
///
/// The right operand is parsed at the operator's own precedence, so an
/// operator of equal rank is left to the caller's loop. That makes chains
/// like `a - b - c` group to the left.
pub fn parse_infix_expr<S: TokenStream>(
    parser: &mut Parser<S>,
    left: Option<Expr>,
) -> Option<Expr> {
    let token = parser.current_token().clone();
    let rank = precedence(token.kind);
    parser.advance();

    let right = parse_expr(parser, rank);

    Some(Expr::Infix(InfixExpr {
        operator: token.value.clone(),
        token,
        left: Box::new(left?),
        right: Box::new(right?),
    }))
}
