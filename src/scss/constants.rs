//! SCSS Constants
//!
//! Directive keywords, file naming conventions and diagnostic codes used
//! throughout the SCSS pipeline.

// Directives
/// Imports another stylesheet (`@import "partial";`)
pub const AT_IMPORT: &str = "@import";
/// Applies a mixin (`@include name(args);`)
pub const AT_INCLUDE: &str = "@include";
/// Inherits another selector's declarations (`@extend .name;`)
pub const AT_EXTEND: &str = "@extend";

// File naming
/// Extension appended to import targets that have none
pub const SCSS_EXTENSION: &str = "scss";
/// Prefix marking a partial file meant only for import
pub const PARTIAL_PREFIX: char = '_';

// Diagnostics
/// Source label attached to every diagnostic
pub const DIAGNOSTIC_SOURCE: &str = "scss";
/// A file-scope variable that nothing references
pub const CODE_UNUSED_VARIABLE: &str = "unused-variable";
/// A statement that does not decompose into a known shape
pub const CODE_ANOMALOUS_STATEMENT: &str = "anomalous-statement";
