//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, integers, and operators
//! - Token position tracking for error reporting
//!
//! The parser only depends on the `TokenStream` trait, so any token source
//! that repeats its `EOF` sentinel can be plugged in.

pub mod lexer;
pub mod stream;
pub mod tokens;

#[cfg(test)]
mod tests;
