//! Rule header classification
//!
//! A block header is parsed once into a [`RuleHeader`] before any further
//! branching. Test order is fixed: animation, function, mixin, selector, and
//! finally the raw fallback that keeps the literal text.

use regex::Regex;
use std::sync::LazyLock;

use crate::scss::ast::Parameter;
use crate::scss::value::parse_parameters;

static ANIMATION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@(?:-[a-z]+-)?keyframes\s+(.+)$").expect("Failed to compile keyframes regex")
});

static FUNCTION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@function\s*([^\s(]+)\s*\((.*)\)$").expect("Failed to compile function regex")
});

static MIXIN_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@mixin\s+([^\s(]+)\s*(?:\((.*)\))?$").expect("Failed to compile mixin regex")
});

static INTERPOLATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#\{[^}]*\}").expect("Failed to compile interpolation regex")
});

/// Type, class, id, attribute and pseudo tokens joined by combinators,
/// commas for grouping and `&` for the parent reference
static SELECTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[\w\s.#:=\[\]'",&>+~*%()|^$-]+$"#).expect("Failed to compile selector regex")
});

#[derive(Debug, Clone, PartialEq)]
pub enum RuleHeader {
    Animation { name: String },
    Function { name: String, params: Vec<Parameter> },
    Mixin { name: String, params: Vec<Parameter> },
    Selector { selector: String },
    Raw,
}

impl RuleHeader {
    pub fn parse(header: &str) -> Self {
        let header = header.trim();

        if let Some(caps) = ANIMATION_HEADER.captures(header) {
            return RuleHeader::Animation {
                name: caps[1].trim().to_string(),
            };
        }

        if let Some(caps) = FUNCTION_HEADER.captures(header) {
            return RuleHeader::Function {
                name: caps[1].to_string(),
                params: parse_parameters(&caps[2]),
            };
        }

        if let Some(caps) = MIXIN_HEADER.captures(header) {
            return RuleHeader::Mixin {
                name: caps[1].to_string(),
                params: caps
                    .get(2)
                    .map(|m| parse_parameters(m.as_str()))
                    .unwrap_or_default(),
            };
        }

        if is_selector(header) {
            return RuleHeader::Selector {
                selector: header.to_string(),
            };
        }

        RuleHeader::Raw
    }
}

/// Whether `header` reads as a selector list. Interpolated fragments are
/// accepted as opaque selector text.
pub fn is_selector(header: &str) -> bool {
    if header.is_empty() || header.starts_with('@') {
        return false;
    }
    let without_interpolation = INTERPOLATION.replace_all(header, "x");
    SELECTOR.is_match(&without_interpolation)
}
