//! Error types and error handling for the lexer.
//!
//! This module defines the error types used while scanning. It includes:
//!
//! - Error structures with source position information
//! - Fatal stream faults and the recoverable illegal character case
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
