//! Variable usage validation for parsed SCSS trees.
//!
//! Reports file-scope variables that nothing references. The search covers
//! the whole merged tree, imports included, so a variable declared in a
//! partial and consumed by the file importing it counts as used.
//!
//! - **References**: a reference is a literal `$name` token. Tokens are
//!   collected from every declaration value (size lists contribute each
//!   element), include arguments, parameter defaults, selector headers and
//!   the opaque text of mixin, function, animation and raw bodies.
//!
//! - **Variables referencing variables**: a variable's own value counts as a
//!   reference to other variables, never to itself.
//!
//! - **Duplicates**: every declaration of a name is checked on its own, and a
//!   reference to the name marks all of them used.
//!
//! Validation performs no I/O and never fails.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::scss::ast::{DeclarationKind, Parameter, Position, Rule, RuleKind, SourceFile, Variable};
use crate::scss::diagnostics::Diagnostic;
use crate::scss::scss_utils::variable_references;
use crate::scss::value::Value;

/// A variable no other part of the tree references
#[derive(Debug, Clone, PartialEq)]
pub struct UnusedVariable {
    pub name: String,
    pub path: PathBuf,
    pub position: Position,
}

impl UnusedVariable {
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::unused_variable(&self.path, self.position, &self.name)
    }
}

impl fmt::Display for UnusedVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unused var: ${} at line {} and column {}",
            self.name, self.position.line, self.position.col
        )
    }
}

/// A declared variable together with the file that owns it
struct DeclaredVariable<'t> {
    variable: &'t Variable,
    path: &'t Path,
    references: HashSet<&'t str>,
}

/// Checks a fully merged tree for unused variables
pub struct VariableUsageValidator<'t> {
    root: &'t SourceFile,
}

impl<'t> VariableUsageValidator<'t> {
    pub fn new(root: &'t SourceFile) -> Self {
        Self { root }
    }

    /// Every value payload in the tree, depth-first through files, rules and
    /// their children
    pub fn collect_values(&self) -> Vec<&'t Value> {
        let mut values = Vec::new();
        for file in Self::files(self.root) {
            for rule in &file.rules {
                Self::collect_rule_values(rule, &mut values);
            }
        }
        values
    }

    /// Unused variables, files in pre-order and each file in declaration order
    pub fn find_unused(&self) -> Vec<UnusedVariable> {
        let tree_references = self.tree_references();
        let declared = self.declared_variables();

        declared
            .iter()
            .enumerate()
            .filter(|(index, candidate)| {
                let name = candidate.variable.name.as_str();
                let used = tree_references.contains(name)
                    || declared
                        .iter()
                        .enumerate()
                        .any(|(other, decl)| other != *index && decl.references.contains(name));
                !used
            })
            .map(|(_, unused)| UnusedVariable {
                name: unused.variable.name.clone(),
                path: unused.path.to_path_buf(),
                position: unused.variable.position,
            })
            .collect()
    }

    /// Root first, then imports depth-first in import order
    fn files(root: &'t SourceFile) -> Vec<&'t SourceFile> {
        let mut files = vec![root];
        for import in &root.imports {
            files.extend(Self::files(&import.file));
        }
        files
    }

    fn declared_variables(&self) -> Vec<DeclaredVariable<'t>> {
        Self::files(self.root)
            .into_iter()
            .flat_map(|file| {
                file.variables.iter().map(move |variable| DeclaredVariable {
                    variable,
                    path: &file.path,
                    references: value_references(&variable.value).collect(),
                })
            })
            .collect()
    }

    /// References from everything except file-scope variable values
    fn tree_references(&self) -> HashSet<&'t str> {
        let mut references = HashSet::new();
        for value in self.collect_values() {
            references.extend(value_references(value));
        }
        for file in Self::files(self.root) {
            for rule in &file.rules {
                Self::collect_text_references(rule, &mut references);
            }
        }
        references
    }

    fn collect_rule_values(rule: &'t Rule, values: &mut Vec<&'t Value>) {
        match &rule.kind {
            RuleKind::Selector {
                declarations,
                children,
                ..
            } => {
                for declaration in declarations {
                    match &declaration.kind {
                        DeclarationKind::Property { value, .. } => values.push(value),
                        DeclarationKind::Include { args, .. } => {
                            values.extend(args.iter().map(|arg| &arg.value));
                        }
                        DeclarationKind::Mixin { params, .. } => {
                            values.extend(parameter_defaults(params));
                        }
                        DeclarationKind::Extend { .. } | DeclarationKind::RawStatement { .. } => {}
                    }
                }
                for child in children {
                    Self::collect_rule_values(child, values);
                }
            }
            RuleKind::Mixin { params, .. } | RuleKind::Function { params, .. } => {
                values.extend(parameter_defaults(params));
            }
            RuleKind::Animation { .. } | RuleKind::RawStatement { .. } => {}
        }
    }

    /// References found in selector headers and opaque text
    fn collect_text_references(rule: &'t Rule, references: &mut HashSet<&'t str>) {
        match &rule.kind {
            RuleKind::Selector {
                header,
                declarations,
                children,
            } => {
                references.extend(variable_references(header));
                for declaration in declarations {
                    match &declaration.kind {
                        DeclarationKind::Include {
                            content: Some(content),
                            ..
                        } => references.extend(variable_references(content)),
                        DeclarationKind::Mixin { body, .. } => {
                            references.extend(variable_references(body));
                        }
                        DeclarationKind::RawStatement { text } => {
                            references.extend(variable_references(text));
                        }
                        _ => {}
                    }
                }
                for child in children {
                    Self::collect_text_references(child, references);
                }
            }
            RuleKind::Mixin { body, .. }
            | RuleKind::Function { body, .. }
            | RuleKind::Animation { body, .. } => references.extend(variable_references(body)),
            RuleKind::RawStatement { text } => references.extend(variable_references(text)),
        }
    }
}

fn parameter_defaults(params: &[Parameter]) -> impl Iterator<Item = &Value> {
    params.iter().filter_map(|param| param.default.as_ref())
}

fn value_references(value: &Value) -> impl Iterator<Item = &str> {
    let text: &str = match value {
        Value::Color { raw, .. } | Value::Url { raw } | Value::String { raw } => raw,
        Value::Calc { expr } => expr,
        // size lists are purely numeric
        Value::Size { .. } => "",
    };
    variable_references(text)
}

/// Unused variables of a merged tree, in report order
pub fn check_unused_variables(root: &SourceFile) -> Vec<UnusedVariable> {
    VariableUsageValidator::new(root).find_unused()
}
