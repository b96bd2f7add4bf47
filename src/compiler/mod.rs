//! The compile pipeline.
//!
//! Runs the phases strictly in order (tokenize, parse, generate) over a
//! source held fully in memory, and handles the file level concerns around
//! it: reading the input and writing the generated code next to the other
//! results.

pub mod compiler;
pub mod options;
