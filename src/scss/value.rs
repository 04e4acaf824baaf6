//! SCSS value classification
//!
//! Maps the right-hand side of a declaration to exactly one typed [`Value`].
//! Decision order, first match wins:
//!
//! 1. contains `calc(`            -> [`Value::Calc`] with the inner expression
//! 2. hex color token or `rgb`     -> [`Value::Color`]
//! 3. contains `url(`             -> [`Value::Url`] with the extracted path
//! 4. every token is `<number><unit>?` -> [`Value::Size`], one entry per token
//! 5. anything else               -> [`Value::String`]

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use crate::scss::ast::Parameter;
use crate::scss::color::Color;
use crate::scss::scss_utils::{group_contents, split_top_level, unquote};
use crate::scss::units::SizeUnit;

static SIZE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?(?:\d+\.?\d*|\.\d+))(px|em|rem|vw|vh|%|pt|cm|in|mm)?$")
        .expect("Failed to compile size token regex")
});

static KEYWORD_ARGUMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\$([A-Za-z_][A-Za-z0-9_-]*)\s*:\s*(.*)$")
        .expect("Failed to compile keyword argument regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColorEncoding {
    #[serde(rename = "HEXADECIMAL")]
    Hex,
    #[serde(rename = "RGB")]
    Rgb,
}

/// One `<magnitude><unit>?` entry of a size list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeComponent {
    pub magnitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<SizeUnit>,
}

impl fmt::Display for SizeComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Some(unit) => write!(f, "{}{}", self.magnitude, unit),
            None => write!(f, "{}", self.magnitude),
        }
    }
}

/// A classified declaration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Value {
    Color { encoding: ColorEncoding, raw: String },
    /// Shorthand-friendly list, e.g. `10px 20px`, order preserved
    Size { values: Vec<SizeComponent> },
    Url { raw: String },
    Calc { expr: String },
    String { raw: String },
}

impl Value {
    /// Classify trimmed value text. Total: every input maps to one variant.
    pub fn classify(text: &str) -> Self {
        let text = text.trim();

        if let Some(idx) = text.find("calc(") {
            let expr = group_contents(text, idx + "calc".len()).trim();
            return Value::Calc { expr: expr.to_string() };
        }

        if Color::find_hex_token(text).is_some() {
            return Value::Color {
                encoding: ColorEncoding::Hex,
                raw: text.to_string(),
            };
        }
        if text.contains("rgb") {
            return Value::Color {
                encoding: ColorEncoding::Rgb,
                raw: text.to_string(),
            };
        }

        if let Some(idx) = text.find("url(") {
            let path = unquote(group_contents(text, idx + "url".len()));
            return Value::Url { raw: path.to_string() };
        }

        if let Some(values) = Self::parse_size_list(text) {
            return Value::Size { values };
        }

        Value::String { raw: text.to_string() }
    }

    /// `None` unless every whitespace-separated token is a number with an
    /// optional known unit
    fn parse_size_list(text: &str) -> Option<Vec<SizeComponent>> {
        if text.is_empty() {
            return None;
        }
        text.split_whitespace()
            .map(|token| {
                let caps = SIZE_TOKEN.captures(token)?;
                let magnitude = caps.get(1)?.as_str().parse::<f64>().ok()?;
                let unit = match caps.get(2) {
                    Some(m) => Some(SizeUnit::from_suffix(m.as_str())?),
                    None => None,
                };
                Some(SizeComponent { magnitude, unit })
            })
            .collect()
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Color { .. } => "COLOR",
            Value::Size { .. } => "SIZE",
            Value::Url { .. } => "URL",
            Value::Calc { .. } => "CALC",
            Value::String { .. } => "STRING",
        }
    }

    /// Raw text tokens carried by this value; size lists contribute one token
    /// per element
    pub fn tokens(&self) -> Vec<String> {
        match self {
            Value::Color { raw, .. } | Value::Url { raw } | Value::String { raw } => {
                vec![raw.clone()]
            }
            Value::Calc { expr } => vec![expr.clone()],
            Value::Size { values } => values.iter().map(|v| v.to_string()).collect(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Calc { expr } => write!(f, "calc({})", expr),
            Value::Url { raw } => write!(f, "url({})", raw),
            _ => f.write_str(&self.tokens().join(" ")),
        }
    }
}

/// An `@include` argument, optionally keyword-style (`$name: value`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Argument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub value: Value,
}

impl Argument {
    /// Split a keyword pair before classifying its value
    pub fn classify(text: &str) -> Self {
        let text = text.trim();
        match KEYWORD_ARGUMENT.captures(text) {
            Some(caps) => Argument {
                name: Some(caps[1].to_string()),
                value: Value::classify(&caps[2]),
            },
            None => Argument {
                name: None,
                value: Value::classify(text),
            },
        }
    }

    /// Classify a comma-separated argument list, e.g. the inside of `(...)`
    pub fn classify_list(list: &str) -> Vec<Self> {
        split_top_level(list, ',')
            .into_iter()
            .map(Self::classify)
            .collect()
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "${}: {}", name, self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

/// Decompose a mixin or function parameter list into variable-shaped entries
pub fn parse_parameters(list: &str) -> Vec<Parameter> {
    split_top_level(list, ',')
        .into_iter()
        .map(|piece| {
            let (name, default) = match piece.split_once(':') {
                Some((name, default)) => (name.trim(), Some(Value::classify(default))),
                None => (piece, None),
            };
            Parameter {
                name: name
                    .trim_start_matches('$')
                    .trim_end_matches("...")
                    .to_string(),
                default,
            }
        })
        .collect()
}
