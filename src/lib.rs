//! SCSS Tree Library
//!
//! Parses SCSS stylesheets, follows their imports and builds one
//! position-annotated tree, then reports variables nothing references.

pub mod config;
pub mod logging;
pub mod scss;
#[cfg(test)]
pub mod test_utils;
