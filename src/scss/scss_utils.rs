//! SCSS Utilities
//!
//! Small text helpers shared by the classifiers. They all respect quotes,
//! parentheses and `#{...}` interpolation so separators inside those are
//! never treated as structural.

use regex::Regex;
use std::sync::LazyLock;

static VARIABLE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$([A-Za-z_][A-Za-z0-9_-]*)").expect("Failed to compile variable token regex")
});

/// Split `text` on `separator` where it appears outside quotes, parentheses
/// and interpolation. Pieces are trimmed; empty pieces are dropped.
pub fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;
    let mut prev = '\0';

    for (i, ch) in text.char_indices() {
        if let Some(q) = quote {
            if ch == q && prev != '\\' {
                quote = None;
            }
        } else {
            match ch {
                '"' | '\'' => quote = Some(ch),
                '(' | '[' => depth += 1,
                '{' if prev == '#' => depth += 1,
                ')' | ']' | '}' => depth = depth.saturating_sub(1),
                c if c == separator && depth == 0 => {
                    pieces.push(text[start..i].trim());
                    start = i + c.len_utf8();
                }
                _ => {}
            }
        }
        prev = ch;
    }
    pieces.push(text[start..].trim());
    pieces.retain(|p| !p.is_empty());
    pieces
}

/// Return the text between the `(` at byte offset `open` and its matching `)`.
/// An unclosed group yields everything after the `(`.
pub fn group_contents(text: &str, open: usize) -> &str {
    let mut depth = 0usize;
    for (i, ch) in text[open..].char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return &text[open + 1..open + i];
                }
            }
            _ => {}
        }
    }
    &text[open + 1..]
}

/// Remove one pair of matching surrounding quotes, if present
pub fn unquote(text: &str) -> &str {
    let trimmed = text.trim();
    for q in ['"', '\''] {
        if trimmed.len() >= 2 && trimmed.starts_with(q) && trimmed.ends_with(q) {
            return &trimmed[1..trimmed.len() - 1];
        }
    }
    trimmed
}

/// Names of every `$variable` token referenced in `text`, without the sigil
pub fn variable_references(text: &str) -> impl Iterator<Item = &str> {
    VARIABLE_TOKEN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
}
