//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into a `Program`. It uses a Pratt parser for expressions with proper
//! operator precedence and handles:
//!
//! - Statement parsing (`let`, `return`, expression statements)
//! - Expression parsing (identifiers, integers, prefix and binary operators)
//! - Error recovery and reporting
//!
//! Prefix and infix handlers are chosen per token kind in `lookups`, and
//! the precedence passed down through recursive calls decides how far an
//! operand extends.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
