//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program-level loop.
//! The parser keeps a two-token window (`current` and `peek`) over a
//! `TokenStream` and never looks further ahead or rewinds.
//!
//! Malformed input never aborts a parse. Problems are recorded as
//! diagnostics, the statement being parsed is dropped, and parsing resumes
//! at the next token.

use crate::{
    ast::ast::Program,
    errors::errors::{Diagnostics, Error, ErrorImpl},
    lexer::{
        stream::TokenStream,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::stmt::parse_stmt;

/// Deepest expression recursion accepted before giving up on an expression.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser<S: TokenStream> {
    /// Source of tokens
    stream: S,
    /// Token under examination
    current: Token,
    /// Token after `current`
    peek: Token,
    /// Diagnostics recorded so far
    errors: Diagnostics,
    /// Current expression recursion depth
    depth: usize,
}

impl<S: TokenStream> Parser<S> {
    /// Creates a new Parser and primes both lookahead slots.
    pub fn new(mut stream: S) -> Self {
        let current = stream.next_token();
        let peek = stream.next_token();

        Parser {
            stream,
            current,
            peek,
            errors: Diagnostics::new(),
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the token after the current one.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    /// Returns the kind of the token after the current one.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Shifts the window by one token.
    pub fn advance(&mut self) {
        let next = self.stream.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Advances if the next token is of the expected kind.
    ///
    /// # Returns
    ///
    /// The new current token, or `None` after recording an
    /// `UnexpectedToken` diagnostic.
    pub fn expect_peek(&mut self, expected: TokenKind) -> Option<Token> {
        if self.peek_is(expected) {
            self.advance();
            Some(self.current.clone())
        } else {
            self.push_error(
                ErrorImpl::UnexpectedToken {
                    expected,
                    got: self.peek.kind,
                },
                self.peek.span.start.clone(),
            );
            None
        }
    }

    /// Records a diagnostic.
    pub fn push_error(&mut self, error_impl: ErrorImpl, position: Position) {
        self.errors.push(Error::new(error_impl, position));
    }

    /// Rendered diagnostics, in the order they were recorded.
    pub fn errors(&self) -> Vec<String> {
        self.errors.messages()
    }

    /// The diagnostics recorded so far.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.errors
    }

    /// Returns the current position in the source.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Enters one level of expression recursion.
    ///
    /// Returns `false`, after recording a diagnostic, once the nesting limit
    /// is reached. Every successful call must be paired with `leave`.
    pub fn enter(&mut self) -> bool {
        if self.depth >= MAX_NESTING_DEPTH {
            self.push_error(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            );
            return false;
        }

        self.depth += 1;
        true
    }

    pub fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Parses statements until the end-of-input sentinel.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                program.statements.push(stmt);
            }
            self.advance();
        }

        program
    }
}

/// Parses a whole token stream.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance, holding the recorded diagnostics
/// - The root Program, possibly partial when diagnostics were recorded
pub fn parse<S: TokenStream>(stream: S) -> (Parser<S>, Program) {
    let mut parser = Parser::new(stream);
    let program = parser.parse_program();

    (parser, program)
}
