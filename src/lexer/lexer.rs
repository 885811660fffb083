use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::{
    stream::TokenStream,
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

/// Turns the matched text into a token, or `None` for text that is skipped.
pub type RegexHandler = fn(String, Span) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(&format!("^(?:{})", pattern)).unwrap(),
            handler,
        }
    }
}

lazy_static! {
    // Order matters: two-character operators come before their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new("\\s+", skip_handler),
        RegexPattern::new("[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        RegexPattern::new("[0-9]+", MK_DEFAULT_HANDLER!(TokenKind::Integer)),
        RegexPattern::new("==", MK_DEFAULT_HANDLER!(TokenKind::Equals)),
        RegexPattern::new("!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals)),
        RegexPattern::new("!", MK_DEFAULT_HANDLER!(TokenKind::Not)),
        RegexPattern::new("=", MK_DEFAULT_HANDLER!(TokenKind::Assignment)),
        RegexPattern::new("<", MK_DEFAULT_HANDLER!(TokenKind::Less)),
        RegexPattern::new(">", MK_DEFAULT_HANDLER!(TokenKind::Greater)),
        RegexPattern::new("\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus)),
        RegexPattern::new("-", MK_DEFAULT_HANDLER!(TokenKind::Dash)),
        RegexPattern::new("\\*", MK_DEFAULT_HANDLER!(TokenKind::Star)),
        RegexPattern::new("/", MK_DEFAULT_HANDLER!(TokenKind::Slash)),
        RegexPattern::new(",", MK_DEFAULT_HANDLER!(TokenKind::Comma)),
        RegexPattern::new(";", MK_DEFAULT_HANDLER!(TokenKind::Semicolon)),
        RegexPattern::new("\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen)),
        RegexPattern::new("\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen)),
        RegexPattern::new("\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly)),
        RegexPattern::new("\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly)),
    ];
}

/// Streaming tokenizer over a source string.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn span(&self, start: usize, end: usize) -> Span {
        Span {
            start: Position(start as u32, Rc::clone(&self.file)),
            end: Position(end as u32, Rc::clone(&self.file)),
        }
    }
}

impl TokenStream for Lexer {
    fn next_token(&mut self) -> Token {
        while !self.at_eof() {
            let remaining = self.remainder();
            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remaining)
                    .map(|found| (pattern.handler, found.end()))
            });

            // Unknown characters become a single Illegal token.
            let (handler, len) = match matched {
                Some(matched) => matched,
                None => (
                    illegal_handler as RegexHandler,
                    remaining.chars().next().map_or(1, char::len_utf8),
                ),
            };

            let value = remaining[..len].to_string();
            let span = self.span(self.pos, self.pos + len);
            self.advance_n(len);

            if let Some(token) = handler(value, span) {
                return token;
            }
        }

        MK_TOKEN!(TokenKind::EOF, String::from("EOF"), self.span(self.pos, self.pos))
    }
}

fn skip_handler(_value: String, _span: Span) -> Option<Token> {
    None
}

fn illegal_handler(value: String, span: Span) -> Option<Token> {
    Some(MK_TOKEN!(TokenKind::Illegal, value, span))
}

fn symbol_handler(value: String, span: Span) -> Option<Token> {
    if let Some(kind) = RESERVED_LOOKUP.get(value.as_str()) {
        Some(MK_TOKEN!(*kind, value, span))
    } else {
        Some(MK_TOKEN!(TokenKind::Identifier, value, span))
    }
}

/// Collects every token of `source`, ending with a single `EOF`.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
