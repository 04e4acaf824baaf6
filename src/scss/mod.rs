//! SCSS tree builder
//!
//! Parses a subset of SCSS into a position-annotated tree:
//! - `scanner` splits source text into `;`/`{`/`}` terminated segments
//! - `parser` assembles rules, declarations and variables, then resolves imports
//! - `variable_usage` reports variables nothing in the merged tree references

pub mod ast;
pub mod color;
pub mod constants;
pub mod declarations;
pub mod diagnostics;
pub mod error;
pub mod header;
pub mod imports;
pub mod parser;
pub mod scanner;
pub mod scss_utils;
pub mod tree_printer;
pub mod units;
pub mod value;
pub mod variable_usage;

#[cfg(test)]
mod value_tests;
