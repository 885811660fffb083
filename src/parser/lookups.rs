use crate::{ast::ast::Expr, lexer::{stream::TokenStream, tokens::TokenKind}};

use super::{expr::*, parser::Parser};

/// Binding power of an operator, weakest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,      // == !=
    LessGreater, // < >
    Sum,         // + -
    Product,     // * /
    Prefix,      // -x !x
    Call,
}

pub type PrefixHandler<S> = fn(&mut Parser<S>) -> Option<Expr>;
pub type InfixHandler<S> = fn(&mut Parser<S>, Option<Expr>) -> Option<Expr>;

/// Binding power of `kind` when it appears between two operands.
///
/// Anything that is not a binary operator is `Lowest`, which is what stops
/// the climbing loop at terminators and unrelated tokens.
pub fn precedence(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Equals | TokenKind::NotEquals => Precedence::Equals,
        TokenKind::Less | TokenKind::Greater => Precedence::LessGreater,
        TokenKind::Plus | TokenKind::Dash => Precedence::Sum,
        TokenKind::Star | TokenKind::Slash => Precedence::Product,
        _ => Precedence::Lowest,
    }
}

/// Handler for a token that starts an expression.
pub fn prefix_handler<S: TokenStream>(kind: TokenKind) -> Option<PrefixHandler<S>> {
    match kind {
        TokenKind::Identifier => Some(parse_identifier as PrefixHandler<S>),
        TokenKind::Integer => Some(parse_integer_literal as PrefixHandler<S>),
        TokenKind::Not | TokenKind::Dash => Some(parse_prefix_expr as PrefixHandler<S>),
        _ => None,
    }
}

/// Handler for a token that continues an expression.
pub fn infix_handler<S: TokenStream>(kind: TokenKind) -> Option<InfixHandler<S>> {
    match kind {
        TokenKind::Plus
        | TokenKind::Dash
        | TokenKind::Star
        | TokenKind::Slash
        | TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::Greater => Some(parse_infix_expr as InfixHandler<S>),
        _ => None,
    }
}
