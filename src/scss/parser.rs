//! SCSS parser
//!
//! Builds a [`SourceFile`] tree from source text. Block structure comes from
//! an explicit stack of open selector rules: `{` pushes, `}` pops, and the
//! stack top is the parent any new rule or declaration attaches to. Imports
//! are resolved after a file's own blocks are extracted, each one parsed to
//! completion before the next.
//!
//! A parse invocation either returns a complete tree or fails; no partial tree
//! is ever handed back.

use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use crate::config::ScssConfig;
use crate::scss::ast::{
    Declaration, DeclarationKind, ImportedFile, Position, Rule, RuleKind, SourceFile, Variable,
};
use crate::scss::constants::AT_INCLUDE;
use crate::scss::declarations::{extract_declaration, parse_include, split_variable, strip_directive};
use crate::scss::diagnostics::Diagnostic;
use crate::scss::error::{ScssError, ScssResult};
use crate::scss::header::RuleHeader;
use crate::scss::imports::{normalize_import_name, parse_import, ImportDirective, ImportResolver};
use crate::scss::scanner::{read_source, Scanner, Segment, Terminator};
use crate::scss::value::Value;

/// Result of one successful parse invocation
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    /// Fully merged tree, imports grafted under their importing file
    pub file: SourceFile,
    /// Recovered anomalies from every parsed file
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse a file and everything it imports
pub fn parse_file(path: &Path, config: &ScssConfig) -> ScssResult<ParseOutcome> {
    ScssParser::new(config).parse_file(path)
}

/// Parse in-memory source as if it were stored at `path`; imports resolve
/// relative to that path
pub fn parse_source(source: &str, path: &Path, config: &ScssConfig) -> ScssResult<ParseOutcome> {
    ScssParser::new(config).parse_source(source, path)
}

/// State for a single parse invocation. Consumed by the parse call so nothing
/// carries over between invocations.
pub struct ScssParser<'c> {
    resolver: ImportResolver<'c>,
    /// Files currently being parsed, outermost first
    import_stack: Vec<PathBuf>,
    diagnostics: Vec<Diagnostic>,
}

impl<'c> ScssParser<'c> {
    pub fn new(config: &'c ScssConfig) -> Self {
        Self {
            resolver: ImportResolver::new(config.include_path.as_deref()),
            import_stack: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn parse_file(mut self, path: &Path) -> ScssResult<ParseOutcome> {
        let file = self.parse_path(path)?;
        Ok(ParseOutcome {
            file,
            diagnostics: self.diagnostics,
        })
    }

    pub fn parse_source(mut self, source: &str, path: &Path) -> ScssResult<ParseOutcome> {
        if source.trim().is_empty() {
            return Err(ScssError::empty_file(path));
        }
        self.import_stack.push(stack_key(path));
        let file = self.build(source, path)?;
        Ok(ParseOutcome {
            file,
            diagnostics: self.diagnostics,
        })
    }

    fn parse_path(&mut self, path: &Path) -> ScssResult<SourceFile> {
        let key = stack_key(path);
        if self.import_stack.contains(&key) {
            let chain = self
                .import_stack
                .iter()
                .chain(std::iter::once(&key))
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(" -> ");
            return Err(ScssError::ImportCycle {
                path: path.to_path_buf(),
                chain,
            });
        }

        let source = read_source(path)?;
        self.import_stack.push(key);
        let file = self.build(&source, path);
        self.import_stack.pop();
        file
    }

    fn build(&mut self, source: &str, path: &Path) -> ScssResult<SourceFile> {
        info!("Parsing {}", path.display());
        let extracted = BlockExtractor::new(source, path).run()?;
        self.diagnostics.extend(extracted.diagnostics);

        let mut imports = Vec::with_capacity(extracted.imports.len());
        for directive in &extracted.imports {
            let resolved = self.resolver.resolve(&directive.target, path);
            debug!(
                "Import '{}' at {} in {} resolved to {}",
                directive.target,
                directive.position,
                path.display(),
                resolved.display()
            );
            let file = self.parse_path(&resolved)?;
            imports.push(ImportedFile {
                name: normalize_import_name(&directive.target),
                file,
            });
        }

        Ok(SourceFile {
            path: path.to_path_buf(),
            rules: extracted.rules,
            variables: extracted.variables,
            imports,
        })
    }
}

fn stack_key(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// A selector whose `}` has not been seen yet
struct OpenRule {
    header: String,
    position: Position,
    declarations: Vec<Declaration>,
    children: Vec<Rule>,
}

/// Everything extracted from one file before imports are resolved
#[derive(Default)]
struct ExtractedFile {
    rules: Vec<Rule>,
    variables: Vec<Variable>,
    imports: Vec<ImportDirective>,
    diagnostics: Vec<Diagnostic>,
}

struct BlockExtractor<'a> {
    path: &'a Path,
    scanner: Scanner<'a>,
    open: Vec<OpenRule>,
    file: ExtractedFile,
}

impl<'a> BlockExtractor<'a> {
    fn new(source: &str, path: &'a Path) -> Self {
        Self {
            path,
            scanner: Scanner::new(source, path),
            open: Vec::new(),
            file: ExtractedFile::default(),
        }
    }

    fn run(mut self) -> ScssResult<ExtractedFile> {
        loop {
            let segment = self.scanner.next_segment()?;
            match segment.terminator {
                Terminator::Semicolon => self.statement(&segment.text, segment.position),
                Terminator::OpenBrace => self.open_block(segment)?,
                Terminator::CloseBrace => self.close_block(segment)?,
                Terminator::Eof => {
                    if let Some(unclosed) = self.open.last() {
                        return Err(ScssError::structural(
                            self.path,
                            unclosed.position.line,
                            unclosed.position.col,
                            format!("Unterminated block '{}': missing '}}'", unclosed.header),
                        ));
                    }
                    self.statement(&segment.text, segment.position);
                    return Ok(self.file);
                }
            }
        }
    }

    /// Depth a rule created now would have
    fn depth(&self) -> usize {
        self.open.len() + 1
    }

    /// Attach a finished rule to the innermost open selector, or to the file
    fn attach(&mut self, rule: Rule) {
        debug!(
            "{} rule at {} depth {}",
            rule.kind.type_name(),
            rule.position,
            rule.depth
        );
        match self.open.last_mut() {
            Some(parent) => parent.children.push(rule),
            None => self.file.rules.push(rule),
        }
    }

    fn anomaly(&mut self, text: &str, position: Position) {
        warn!(
            "Unrecognized statement in {} at {}: '{}'",
            self.path.display(),
            position,
            text
        );
        self.file
            .diagnostics
            .push(Diagnostic::anomalous_statement(self.path, position, text));
    }

    fn statement(&mut self, text: &str, position: Position) {
        if text.is_empty() {
            return;
        }
        if self.open.is_empty() {
            self.file_statement(text, position);
        } else {
            self.body_statement(text, position);
        }
    }

    /// Statement at file scope: import, variable or raw text
    fn file_statement(&mut self, text: &str, position: Position) {
        if let Some(import) = parse_import(text) {
            for target in import.targets {
                self.file.imports.push(ImportDirective { target, position });
            }
            if !import.css.is_empty() {
                let text = format!("@import {}", import.css.join(", "));
                self.attach(Rule {
                    kind: RuleKind::RawStatement { text },
                    depth: 1,
                    position,
                });
            }
            return;
        }

        if let Some((name, value, flags)) = split_variable(text) {
            if self.file.variables.iter().any(|v| v.name == name) {
                warn!(
                    "Duplicate variable ${} in {} at {}",
                    name,
                    self.path.display(),
                    position
                );
            }
            self.file.variables.push(Variable {
                name,
                value: Value::classify(&value),
                flags,
                position,
            });
            return;
        }

        if !text.starts_with('@') {
            self.anomaly(text, position);
        }
        self.attach(Rule {
            kind: RuleKind::RawStatement {
                text: text.to_string(),
            },
            depth: 1,
            position,
        });
    }

    /// Statement inside a selector body
    fn body_statement(&mut self, text: &str, position: Position) {
        let kind = match extract_declaration(text) {
            Some(kind) => kind,
            None => {
                self.anomaly(text, position);
                DeclarationKind::RawStatement {
                    text: text.to_string(),
                }
            }
        };
        self.push_declaration(kind, position);
    }

    fn push_declaration(&mut self, kind: DeclarationKind, position: Position) {
        debug!("{} declaration at {}", kind.type_name(), position);
        if let Some(parent) = self.open.last_mut() {
            parent.declarations.push(Declaration { kind, position });
        }
    }

    fn open_block(&mut self, segment: Segment) -> ScssResult<()> {
        let header = segment.text;
        let position = segment.position;
        if header.is_empty() {
            return Err(ScssError::structural(
                self.path,
                position.line,
                position.col,
                "Missing rule header before '{'",
            ));
        }
        let depth = self.depth();

        if let Some(rest) = strip_directive(&header, AT_INCLUDE) {
            let content = self.scanner.capture_block(position)?;
            let include = if self.open.is_empty() {
                None
            } else {
                parse_include(rest, Some(content.clone()))
            };
            match include {
                Some(kind) => self.push_declaration(kind, position),
                None => self.attach(Rule {
                    kind: RuleKind::RawStatement {
                        text: block_text(&header, &content),
                    },
                    depth,
                    position,
                }),
            }
            return Ok(());
        }

        match RuleHeader::parse(&header) {
            RuleHeader::Selector { selector } => {
                debug!("Opening selector '{}' at {} depth {}", selector, position, depth);
                self.open.push(OpenRule {
                    header: selector,
                    position,
                    declarations: Vec::new(),
                    children: Vec::new(),
                });
            }
            RuleHeader::Mixin { name, params } => {
                let body = self.scanner.capture_block(position)?;
                if self.open.is_empty() {
                    self.attach(Rule {
                        kind: RuleKind::Mixin { name, params, body },
                        depth,
                        position,
                    });
                } else {
                    self.push_declaration(DeclarationKind::Mixin { name, params, body }, position);
                }
            }
            RuleHeader::Function { name, params } => {
                let body = self.scanner.capture_block(position)?;
                self.attach(Rule {
                    kind: RuleKind::Function { name, params, body },
                    depth,
                    position,
                });
            }
            RuleHeader::Animation { name } => {
                let body = self.scanner.capture_block(position)?;
                self.attach(Rule {
                    kind: RuleKind::Animation { name, body },
                    depth,
                    position,
                });
            }
            RuleHeader::Raw => {
                let body = self.scanner.capture_block(position)?;
                self.attach(Rule {
                    kind: RuleKind::RawStatement {
                        text: block_text(&header, &body),
                    },
                    depth,
                    position,
                });
            }
        }
        Ok(())
    }

    fn close_block(&mut self, segment: Segment) -> ScssResult<()> {
        // last statement of a body may omit its semicolon
        self.statement(&segment.text, segment.position);

        let Some(open) = self.open.pop() else {
            let at = segment.terminator_position;
            return Err(ScssError::structural(self.path, at.line, at.col, "Unexpected '}'"));
        };
        let rule = Rule {
            kind: RuleKind::Selector {
                header: open.header,
                declarations: open.declarations,
                children: open.children,
            },
            depth: self.depth(),
            position: open.position,
        };
        self.attach(rule);
        Ok(())
    }
}

fn block_text(header: &str, body: &str) -> String {
    if body.is_empty() {
        format!("{} {{ }}", header)
    } else {
        format!("{} {{ {} }}", header, body)
    }
}
