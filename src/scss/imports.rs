//! Import resolution
//!
//! Turns `@import` statements into targets and resolves each target to a
//! file path. Lookup order for a target `dir/name`:
//!
//! 1. `<include path>/dir/_name.scss`
//! 2. `<importing dir>/dir/_name.scss`
//! 3. `<include path>/dir/name.scss`
//! 4. `<importing dir>/dir/name.scss`
//!
//! The first existing candidate wins. When none exists the last candidate is
//! returned anyway and the failure surfaces when the file is read.

use std::path::{Path, PathBuf};

use crate::scss::ast::Position;
use crate::scss::constants::{AT_IMPORT, PARTIAL_PREFIX, SCSS_EXTENSION};
use crate::scss::declarations::strip_directive;
use crate::scss::scss_utils::{split_top_level, unquote};

/// A pending SCSS import found while extracting blocks
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDirective {
    pub target: String,
    pub position: Position,
}

/// The pieces of one `@import` statement
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImportStatement {
    /// Quoted SCSS targets, unquoted, in source order
    pub targets: Vec<String>,
    /// Plain CSS imports (`url(...)`, `.css`, remote), kept verbatim
    pub css: Vec<String>,
}

/// Split an `@import` statement. Returns `None` for any other statement.
pub fn parse_import(statement: &str) -> Option<ImportStatement> {
    let rest = strip_directive(statement.trim(), AT_IMPORT)?;
    let mut import = ImportStatement::default();

    for piece in split_top_level(rest, ',') {
        let quoted = piece.len() >= 2
            && (piece.starts_with('"') || piece.starts_with('\''))
            && piece.ends_with(&piece[..1]);
        let target = unquote(piece);
        if quoted && !is_css_target(target) {
            import.targets.push(target.to_string());
        } else {
            import.css.push(piece.to_string());
        }
    }

    Some(import)
}

fn is_css_target(target: &str) -> bool {
    target.ends_with(".css")
        || target.starts_with("http://")
        || target.starts_with("https://")
        || target.starts_with("//")
        || target.starts_with("url(")
}

/// Split `dir/name.scss` into its directory part and bare stem
fn split_target(target: &str) -> (Option<&str>, &str) {
    let target = target.trim();
    let target = target
        .strip_suffix(&format!(".{}", SCSS_EXTENSION))
        .unwrap_or(target);
    match target.rsplit_once('/') {
        Some((dir, stem)) => (Some(dir), stem),
        None => (None, target),
    }
}

/// Normalized partial-form name of an import target, e.g. `base/_colors`
pub fn normalize_import_name(target: &str) -> String {
    let (dir, stem) = split_target(target);
    let stem = stem.trim_start_matches(PARTIAL_PREFIX);
    match dir {
        Some(dir) => format!("{}/{}{}", dir, PARTIAL_PREFIX, stem),
        None => format!("{}{}", PARTIAL_PREFIX, stem),
    }
}

/// Resolves import targets against an optional include directory and the
/// importing file's own directory
#[derive(Debug, Clone)]
pub struct ImportResolver<'a> {
    include_path: Option<&'a Path>,
}

impl<'a> ImportResolver<'a> {
    pub fn new(include_path: Option<&'a Path>) -> Self {
        Self { include_path }
    }

    /// Every candidate path in lookup order
    pub fn candidates(&self, target: &str, importing_file: &Path) -> Vec<PathBuf> {
        let (dir, stem) = split_target(target);
        let bare = stem.trim_start_matches(PARTIAL_PREFIX);
        let partial = format!("{}{}.{}", PARTIAL_PREFIX, bare, SCSS_EXTENSION);
        let plain = format!("{}.{}", bare, SCSS_EXTENSION);

        let relative = |file_name: &str| match dir {
            Some(dir) => Path::new(dir).join(file_name),
            None => PathBuf::from(file_name),
        };
        let importing_dir = importing_file.parent().unwrap_or_else(|| Path::new(""));

        let mut candidates = Vec::with_capacity(4);
        for file_name in [&partial, &plain] {
            if let Some(include_path) = self.include_path {
                candidates.push(include_path.join(relative(file_name)));
            }
            candidates.push(importing_dir.join(relative(file_name)));
        }
        candidates
    }

    /// First existing candidate, or the last candidate when none exists
    pub fn resolve(&self, target: &str, importing_file: &Path) -> PathBuf {
        let candidates = self.candidates(target, importing_file);
        match candidates.iter().find(|candidate| candidate.is_file()) {
            Some(found) => found.clone(),
            None => {
                log::debug!(
                    "No candidate exists for import '{}' from {}",
                    target,
                    importing_file.display()
                );
                candidates.last().cloned().unwrap_or_else(|| PathBuf::from(target))
            }
        }
    }
}
