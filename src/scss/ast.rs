//! SCSS syntax tree
//!
//! Every file parse produces one [`SourceFile`] that exclusively owns its rules,
//! declarations, values, variables and imported child files. Nodes are built in
//! a single pass and never mutated afterwards.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::scss::value::{Argument, Value};

/// Source position: 1-based line, 0-based column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// One parsed file together with everything it imported
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "FILE")]
pub struct SourceFile {
    pub path: PathBuf,
    /// Depth-1 rules in source order
    pub rules: Vec<Rule>,
    /// File-scope variables in declaration order
    pub variables: Vec<Variable>,
    pub imports: Vec<ImportedFile>,
}

/// An imported file grafted under the file that imported it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "IMPORT")]
pub struct ImportedFile {
    /// Import target normalized to partial form, e.g. `base/_colors`
    pub name: String,
    pub file: SourceFile,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    #[serde(flatten)]
    pub kind: RuleKind,
    /// Nesting depth, 1 for file-scope rules
    pub depth: usize,
    #[serde(flatten)]
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleKind {
    Selector {
        header: String,
        declarations: Vec<Declaration>,
        children: Vec<Rule>,
    },
    Mixin {
        name: String,
        params: Vec<Parameter>,
        body: String,
    },
    Function {
        name: String,
        params: Vec<Parameter>,
        body: String,
    },
    Animation {
        name: String,
        body: String,
    },
    /// Anything the classifier does not recognize, kept verbatim
    RawStatement { text: String },
}

impl RuleKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            RuleKind::Selector { .. } => "SELECTOR",
            RuleKind::Mixin { .. } => "MIXIN",
            RuleKind::Function { .. } => "FUNCTION",
            RuleKind::Animation { .. } => "ANIMATION",
            RuleKind::RawStatement { .. } => "RAW_STATEMENT",
        }
    }
}

impl Rule {
    /// Nested rules, empty for everything but selectors
    pub fn children(&self) -> &[Rule] {
        match &self.kind {
            RuleKind::Selector { children, .. } => children,
            _ => &[],
        }
    }

    pub fn declarations(&self) -> &[Declaration] {
        match &self.kind {
            RuleKind::Selector { declarations, .. } => declarations,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declaration {
    #[serde(flatten)]
    pub kind: DeclarationKind,
    #[serde(flatten)]
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeclarationKind {
    Property {
        name: String,
        value: Value,
    },
    Include {
        name: String,
        args: Vec<Argument>,
        #[serde(skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    },
    Extend {
        name: String,
    },
    /// A mixin declared inside a selector body
    Mixin {
        name: String,
        params: Vec<Parameter>,
        body: String,
    },
    /// A statement that did not decompose into any known shape
    RawStatement { text: String },
}

impl DeclarationKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            DeclarationKind::Property { .. } => "PROPERTY",
            DeclarationKind::Include { .. } => "INCLUDE",
            DeclarationKind::Extend { .. } => "EXTEND",
            DeclarationKind::Mixin { .. } => "MIXIN",
            DeclarationKind::RawStatement { .. } => "RAW_STATEMENT",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclarationKind::Property { name, value } => write!(f, "{}: {}", name, value),
            DeclarationKind::Include { name, args, .. } => {
                let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
                write!(f, "@include {}({})", name, args.join(", "))
            }
            DeclarationKind::Extend { name } => write!(f, "@extend {}", name),
            DeclarationKind::Mixin { name, .. } => write!(f, "@mixin {}", name),
            DeclarationKind::RawStatement { text } => f.write_str(text),
        }
    }
}

/// A mixin or function parameter, e.g. `$radius: 4px`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

/// File-scope variable declaration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "VARIABLE")]
pub struct Variable {
    /// Name without the `$` sigil
    pub name: String,
    pub value: Value,
    /// Flags such as `default` or `global`, without the `!`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<String>,
    #[serde(flatten)]
    pub position: Position,
}
