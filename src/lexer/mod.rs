//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts a character
//! stream into a stream of tokens. It handles:
//!
//! - Decoding runes from a byte stream with one rune of pushback
//! - Recognition of identifiers, integer literals and single-character symbols
//! - Line and column tracking for every token
//! - Reporting unrecognised characters as `Illegal` tokens

pub mod lexer;
pub mod reader;
pub mod tokens;
