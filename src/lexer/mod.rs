//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a sequence of tokens for parsing. It handles:
//!
//! - Splitting the source into whitespace-delimited chunks
//! - Prefix matching each chunk against an ordered regex rule table
//! - Word-boundary sensitive keywords, identifiers and integers
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
