use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{ExpressionStmt, LetStmt, ReturnStmt},
    },
    lexer::{stream::TokenStream, tokens::TokenKind},
    parser::{expr::parse_expr, lookups::Precedence},
};

use super::parser::Parser;

/// Dispatches on the current token. Anything that is not a keyword starts an
/// expression statement.
pub fn parse_stmt<S: TokenStream>(parser: &mut Parser<S>) -> Option<Stmt> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_let_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        _ => Some(parse_expression_stmt(parser)),
    }
}

/// `let <identifier> = <expression>;`
///
/// Leaves the parser on the statement's last token.
pub fn parse_let_stmt<S: TokenStream>(parser: &mut Parser<S>) -> Option<Stmt> {
    let token = parser.current_token().clone();

    let name = Identifier::from(parser.expect_peek(TokenKind::Identifier)?);

    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, Precedence::Lowest);

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(Stmt::Let(LetStmt { token, name, value }))
}

/// `return <expression>;`, where the expression may be left out.
pub fn parse_return_stmt<S: TokenStream>(parser: &mut Parser<S>) -> Option<Stmt> {
    let token = parser.current_token().clone();

    let value = if parser.peek_is(TokenKind::Semicolon) || parser.peek_is(TokenKind::EOF) {
        None
    } else {
        parser.advance();
        parse_expr(parser, Precedence::Lowest)
    };

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(Stmt::Return(ReturnStmt { token, value }))
}

/// A lone expression. The trailing `;` is optional, so `1 + 2` on its own is
/// a complete statement.
pub fn parse_expression_stmt<S: TokenStream>(parser: &mut Parser<S>) -> Stmt {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, Precedence::Lowest);

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Stmt::Expression(ExpressionStmt { token, expression })
}
