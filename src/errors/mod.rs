//! Diagnostics produced while parsing.
//!
//! This module defines the error types recorded by the parser. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each diagnostic class
//! - The append-only `Diagnostics` collection the parser reports into

pub mod errors;

#[cfg(test)]
mod tests;
