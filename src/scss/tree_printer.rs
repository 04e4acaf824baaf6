//! Tree printer utility for SCSS tree debugging
//!
//! Renders a parsed [`SourceFile`] as an indented outline, one node per line
//! with its `line:col` position, plus per-type node counts.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::scss::ast::{Declaration, Rule, RuleKind, SourceFile};

/// Longest node text shown before truncation
const MAX_TEXT: usize = 50;

/// Print the outline and node statistics to stderr
pub fn print_tree_to_stderr(file: &SourceFile) {
    eprintln!("=== SCSS Tree ===");
    eprint!("{}", format_outline(file));
    eprintln!();
    eprintln!("=== Tree Statistics ===");
    for (node_type, count) in collect_node_stats(file) {
        eprintln!("{}: {}", node_type, count);
    }
}

/// Indented outline of a file and everything it imports
pub fn format_outline(file: &SourceFile) -> String {
    let mut out = String::new();
    write_file(&mut out, file, None, 0);
    out
}

fn write_file(out: &mut String, file: &SourceFile, import_name: Option<&str>, indent: usize) {
    let pad = "  ".repeat(indent);
    match import_name {
        Some(name) => {
            let _ = writeln!(out, "{}IMPORT {} ({})", pad, name, file.path.display());
        }
        None => {
            let _ = writeln!(out, "{}FILE {}", pad, file.path.display());
        }
    }

    for variable in &file.variables {
        let _ = writeln!(
            out,
            "{}  VARIABLE[{}] ${}: {}",
            pad,
            variable.position,
            variable.name,
            truncate(&variable.value.to_string())
        );
    }
    for rule in &file.rules {
        write_rule(out, rule, indent + 1);
    }
    for import in &file.imports {
        write_file(out, &import.file, Some(import.name.as_str()), indent + 1);
    }
}

fn write_rule(out: &mut String, rule: &Rule, indent: usize) {
    let pad = "  ".repeat(indent);
    let label = match &rule.kind {
        RuleKind::Selector { header, .. } => header.clone(),
        RuleKind::Mixin { name, .. }
        | RuleKind::Function { name, .. }
        | RuleKind::Animation { name, .. } => name.clone(),
        RuleKind::RawStatement { text } => text.clone(),
    };
    let _ = writeln!(
        out,
        "{}{}[{}] depth {} '{}'",
        pad,
        rule.kind.type_name(),
        rule.position,
        rule.depth,
        truncate(&label)
    );

    for declaration in rule.declarations() {
        write_declaration(out, declaration, indent + 1);
    }
    for child in rule.children() {
        write_rule(out, child, indent + 1);
    }
}

fn write_declaration(out: &mut String, declaration: &Declaration, indent: usize) {
    let _ = writeln!(
        out,
        "{}{}[{}] '{}'",
        "  ".repeat(indent),
        declaration.kind.type_name(),
        declaration.position,
        truncate(&declaration.kind.to_string())
    );
}

fn truncate(text: &str) -> String {
    if text.chars().count() > MAX_TEXT {
        let head: String = text.chars().take(MAX_TEXT - 3).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

/// Count nodes by serialized type name, imports included
pub fn collect_node_stats(file: &SourceFile) -> BTreeMap<String, usize> {
    let mut stats = BTreeMap::new();
    collect_file_stats(file, &mut stats);
    stats
}

fn collect_file_stats(file: &SourceFile, stats: &mut BTreeMap<String, usize>) {
    *stats.entry("FILE".to_string()).or_insert(0) += 1;
    *stats.entry("VARIABLE".to_string()).or_insert(0) += file.variables.len();
    for rule in &file.rules {
        collect_rule_stats(rule, stats);
    }
    for import in &file.imports {
        *stats.entry("IMPORT".to_string()).or_insert(0) += 1;
        collect_file_stats(&import.file, stats);
    }
}

fn collect_rule_stats(rule: &Rule, stats: &mut BTreeMap<String, usize>) {
    *stats.entry(rule.kind.type_name().to_string()).or_insert(0) += 1;
    for declaration in rule.declarations() {
        *stats
            .entry(format!("{} (declaration)", declaration.kind.type_name()))
            .or_insert(0) += 1;
    }
    for child in rule.children() {
        collect_rule_stats(child, stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScssConfig;
    use crate::scss::parser::parse_source;
    use std::path::Path;

    #[test]
    fn test_tree_printing() {
        let content = "$gap: 4px;\n.card {\n  margin: $gap;\n  .title { color: red; }\n}\n";
        let outcome = parse_source(content, Path::new("card.scss"), &ScssConfig::default())
            .expect("source should parse");

        let outline = format_outline(&outcome.file);
        assert!(outline.starts_with("FILE card.scss"));
        assert!(outline.contains("VARIABLE[1:0] $gap: 4px"));
        assert!(outline.contains("SELECTOR[2:0] depth 1 '.card'"));
        assert!(outline.contains("SELECTOR[4:2] depth 2 '.title'"));

        let stats = collect_node_stats(&outcome.file);
        assert_eq!(stats.get("SELECTOR"), Some(&2));
        assert_eq!(stats.get("VARIABLE"), Some(&1));
        assert_eq!(stats.get("PROPERTY (declaration)"), Some(&2));
    }

    #[test]
    fn test_truncate_long_text() {
        let long = "a".repeat(80);
        let shown = truncate(&long);
        assert_eq!(shown.chars().count(), MAX_TEXT);
        assert!(shown.ends_with("..."));
        assert_eq!(truncate("short"), "short");
    }
}
