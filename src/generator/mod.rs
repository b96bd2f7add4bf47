//! Code generation module.
//!
//! Turns a parsed definition into Python source. Every AST node knows how to
//! write itself through the `Generate` trait; the top-level `generate`
//! function collects the output into a string.
//!
//! - `generator`: the trait and entry point
//! - `expr`: integer literals, variable references and calls
//! - `stmt`: the function definition

pub mod expr;
pub mod generator;
pub mod stmt;

#[cfg(test)]
mod tests;
