use std::{collections::VecDeque, rc::Rc};

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// A source of tokens for the parser.
///
/// Implementations never rewind, and once input is exhausted they keep
/// returning the same `EOF` token instead of failing.
pub trait TokenStream {
    fn next_token(&mut self) -> Token;
}

impl<T: TokenStream + ?Sized> TokenStream for &mut T {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

/// Replays a pre-built list of tokens.
#[derive(Debug, Clone)]
pub struct TokenBuffer {
    tokens: VecDeque<Token>,
    eof: Token,
}

impl TokenBuffer {
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = tokens
            .last()
            .map(|token| token.span.end.clone())
            .unwrap_or_else(|| Position(0, Rc::new(String::from("shell"))));

        TokenBuffer {
            tokens: tokens.into(),
            eof: MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                Span {
                    start: end.clone(),
                    end
                }
            ),
        }
    }
}

impl From<Vec<Token>> for TokenBuffer {
    fn from(tokens: Vec<Token>) -> Self {
        TokenBuffer::new(tokens)
    }
}

impl TokenStream for TokenBuffer {
    fn next_token(&mut self) -> Token {
        match self.tokens.pop_front() {
            Some(token) if token.kind == TokenKind::EOF => {
                // Anything after the sentinel is unreachable.
                self.tokens.clear();
                self.eof = token.clone();
                token
            }
            Some(token) => token,
            None => self.eof.clone(),
        }
    }
}
