//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive descent parser that turns the token
//! sequence into a single `DefNode`:
//!
//! ```text
//! def        := "def" IDENTIFIER "(" param_list ")" expression "end"
//! param_list := [ IDENTIFIER ("," IDENTIFIER)* ]
//! expression := INTEGER | call | var_ref
//! call       := IDENTIFIER "(" arg_list ")"
//! arg_list   := [ expression ("," expression)* ]
//! var_ref    := IDENTIFIER
//! ```
//!
//! A call and a variable reference both start with an identifier; the parser
//! looks one token further for `(` to tell them apart.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
