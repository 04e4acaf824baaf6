//! Declaration extraction
//!
//! Classifies one statement of a selector body (the scanner already split the
//! body on top-level semicolons) as a property, `@include` or `@extend`.
//! Statements that fit none of these shapes come back as `None`; the caller
//! records them as raw placeholders and keeps going.

use regex::Regex;
use std::sync::LazyLock;

use crate::scss::ast::DeclarationKind;
use crate::scss::constants::{AT_EXTEND, AT_INCLUDE};
use crate::scss::scss_utils::group_contents;
use crate::scss::value::{Argument, Value};

static PROPERTY_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[*_]?[A-Za-z0-9_$#{}-]+$").expect("Failed to compile property name regex")
});

static VARIABLE_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\$([A-Za-z_][A-Za-z0-9_-]*)\s*:\s*(.*)$")
        .expect("Failed to compile variable declaration regex")
});

static VARIABLE_FLAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*!(default|global)\s*$").expect("Failed to compile variable flag regex")
});

/// Classify a single body statement
pub fn extract_declaration(statement: &str) -> Option<DeclarationKind> {
    let statement = statement.trim();

    if let Some(rest) = strip_directive(statement, AT_INCLUDE) {
        return parse_include(rest, None);
    }

    if let Some(rest) = strip_directive(statement, AT_EXTEND) {
        let name = rest.trim().trim_end_matches("!optional").trim();
        if name.is_empty() {
            return None;
        }
        return Some(DeclarationKind::Extend {
            name: name.to_string(),
        });
    }

    if statement.starts_with('@') {
        return None;
    }

    let (name, value) = statement.split_once(':')?;
    let name = name.trim();
    if !PROPERTY_NAME.is_match(name) {
        return None;
    }

    Some(DeclarationKind::Property {
        name: name.to_string(),
        value: Value::classify(value),
    })
}

/// Parse the part of an `@include` after the keyword, e.g. `button($size: 2)`.
/// `content` is the opaque text of a trailing `{ ... }` block, if any.
pub fn parse_include(rest: &str, content: Option<String>) -> Option<DeclarationKind> {
    let rest = rest.trim();
    let name_end = rest
        .find(|c: char| c == '(' || c.is_whitespace())
        .unwrap_or(rest.len());
    let name = &rest[..name_end];
    if name.is_empty() {
        return None;
    }

    let args = match rest[name_end..].find('(') {
        Some(offset) => Argument::classify_list(group_contents(rest, name_end + offset)),
        None => Vec::new(),
    };

    Some(DeclarationKind::Include {
        name: name.to_string(),
        args,
        content,
    })
}

/// Split `$name: value !default` into name, value text and flags
pub fn split_variable(statement: &str) -> Option<(String, String, Vec<String>)> {
    let caps = VARIABLE_DECLARATION.captures(statement.trim())?;
    let name = caps[1].to_string();
    let mut value = caps[2].trim().to_string();
    let mut flags = Vec::new();

    while let Some(flag) = VARIABLE_FLAG.captures(&value) {
        let start = flag.get(0).map(|m| m.start()).unwrap_or(value.len());
        flags.insert(0, flag[1].to_string());
        value.truncate(start);
    }

    Some((name, value, flags))
}

/// `Some(rest)` when `statement` starts with the `directive` keyword
pub fn strip_directive<'s>(statement: &'s str, directive: &str) -> Option<&'s str> {
    let rest = statement.strip_prefix(directive)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) || rest.starts_with('(') {
        Some(rest)
    } else {
        None
    }
}
