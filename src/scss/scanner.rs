//! Source scanner
//!
//! Splits raw SCSS text into segments terminated by `;`, `{`, `}` or end of
//! input while carrying a live `(line, col)` cursor. Segment text is
//! normalized: comments are dropped, tabs and whitespace runs collapse to a
//! single space. Braces inside strings and `#{...}` interpolation are copied
//! through untouched and never terminate a segment.

use std::fs;
use std::path::Path;

use crate::scss::ast::Position;
use crate::scss::error::{IoContext, ScssError, ScssResult};

/// What ended a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    Semicolon,
    OpenBrace,
    CloseBrace,
    Eof,
}

/// Normalized text up to a terminator
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    /// Position of the first non-whitespace character of `text`, or of the
    /// terminator when `text` is empty
    pub position: Position,
    pub terminator: Terminator,
    pub terminator_position: Position,
}

/// Read a source file. Missing, unreadable and empty files all fail with the
/// same I/O error kind.
pub fn read_source(path: &Path) -> ScssResult<String> {
    let content = fs::read_to_string(path).with_io_context(path)?;
    if content.trim().is_empty() {
        return Err(ScssError::empty_file(path));
    }
    Ok(content)
}

pub struct Scanner<'a> {
    path: &'a Path,
    chars: Vec<char>,
    index: usize,
    line: usize,
    col: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &str, path: &'a Path) -> Self {
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);
        Self {
            path,
            chars: source.chars().collect(),
            index: 0,
            line: 1,
            col: 0,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.col)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.index + offset).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.index += 1;
        if ch == '\n' {
            self.line += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    /// Scan the next segment
    pub fn next_segment(&mut self) -> ScssResult<Segment> {
        let mut text = String::new();
        let mut start: Option<Position> = None;
        let mut paren_depth = 0usize;

        loop {
            let here = self.position();
            let Some(ch) = self.peek() else {
                return Ok(Self::finish(text, start, Terminator::Eof, here));
            };

            match ch {
                '/' if self.peek_at(1) == Some('*') => {
                    self.skip_block_comment()?;
                    push_space(&mut text);
                }
                '/' if self.peek_at(1) == Some('/') && paren_depth == 0 => {
                    self.skip_line_comment();
                    push_space(&mut text);
                }
                '"' | '\'' => {
                    start.get_or_insert(here);
                    self.copy_string(ch, &mut text)?;
                }
                '#' if self.peek_at(1) == Some('{') => {
                    start.get_or_insert(here);
                    self.copy_interpolation(&mut text)?;
                }
                ';' if paren_depth == 0 => {
                    self.advance();
                    return Ok(Self::finish(text, start, Terminator::Semicolon, here));
                }
                '{' => {
                    self.advance();
                    return Ok(Self::finish(text, start, Terminator::OpenBrace, here));
                }
                '}' => {
                    self.advance();
                    return Ok(Self::finish(text, start, Terminator::CloseBrace, here));
                }
                c if c.is_whitespace() => {
                    self.advance();
                    push_space(&mut text);
                }
                c => {
                    match c {
                        '(' => paren_depth += 1,
                        ')' => paren_depth = paren_depth.saturating_sub(1),
                        _ => {}
                    }
                    start.get_or_insert(here);
                    text.push(c);
                    self.advance();
                }
            }
        }
    }

    /// Consume an opaque block body up to the `}` matching an already
    /// consumed `{`, returning its normalized text.
    pub fn capture_block(&mut self, open: Position) -> ScssResult<String> {
        let mut body: Vec<String> = Vec::new();
        let mut depth = 0usize;

        loop {
            let segment = self.next_segment()?;
            match segment.terminator {
                Terminator::Semicolon => body.push(format!("{};", segment.text)),
                Terminator::OpenBrace => {
                    depth += 1;
                    if segment.text.is_empty() {
                        body.push("{".to_string());
                    } else {
                        body.push(format!("{} {{", segment.text));
                    }
                }
                Terminator::CloseBrace => {
                    if !segment.text.is_empty() {
                        body.push(segment.text);
                    }
                    if depth == 0 {
                        return Ok(body.join(" "));
                    }
                    depth -= 1;
                    body.push("}".to_string());
                }
                Terminator::Eof => {
                    return Err(ScssError::structural(
                        self.path,
                        open.line,
                        open.col,
                        "Unterminated block: missing '}'",
                    ));
                }
            }
        }
    }

    fn finish(
        text: String,
        start: Option<Position>,
        terminator: Terminator,
        terminator_position: Position,
    ) -> Segment {
        Segment {
            text: text.trim_end().to_string(),
            position: start.unwrap_or(terminator_position),
            terminator,
            terminator_position,
        }
    }

    fn skip_block_comment(&mut self) -> ScssResult<()> {
        let start = self.position();
        self.advance();
        self.advance();
        loop {
            match self.advance() {
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    return Ok(());
                }
                Some(_) => {}
                None => {
                    return Err(ScssError::structural(
                        self.path,
                        start.line,
                        start.col,
                        "Unterminated comment",
                    ));
                }
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn copy_string(&mut self, quote: char, text: &mut String) -> ScssResult<()> {
        let start = self.position();
        text.push(quote);
        self.advance();
        while let Some(ch) = self.advance() {
            text.push(ch);
            if ch == '\\' {
                if let Some(escaped) = self.advance() {
                    text.push(escaped);
                }
            } else if ch == quote {
                return Ok(());
            }
        }
        Err(ScssError::structural(
            self.path,
            start.line,
            start.col,
            "Unterminated string",
        ))
    }

    fn copy_interpolation(&mut self, text: &mut String) -> ScssResult<()> {
        let start = self.position();
        text.push_str("#{");
        self.advance();
        self.advance();
        let mut depth = 1usize;

        while let Some(ch) = self.peek() {
            match ch {
                '"' | '\'' => {
                    self.copy_string(ch, text)?;
                    continue;
                }
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        text.push('}');
                        self.advance();
                        return Ok(());
                    }
                }
                _ => {}
            }
            if ch.is_whitespace() {
                push_space(text);
            } else {
                text.push(ch);
            }
            self.advance();
        }

        Err(ScssError::structural(
            self.path,
            start.line,
            start.col,
            "Unterminated interpolation",
        ))
    }
}

fn push_space(text: &mut String) {
    if !text.is_empty() && !text.ends_with(' ') {
        text.push(' ');
    }
}
