//! OMFL scan driver: turns a character stream into a [`Document`].
//!
//! The scanner makes a single pass over the input, one character at a time,
//! with a handful of line-scoped flags:
//!
//! - **equals seen**: the first `=` on a line switches from key to value; a
//!   second one outside a string is an error.
//! - **in string**: a `"` inside a value toggles it; while set, `#` and `=`
//!   are ordinary characters. There are no escapes.
//! - **in comment**: `#` outside a string discards the rest of the line.
//!
//! A `[` seen before any `=` starts a section header, which consumes the rest
//! of the line. A newline commits the buffered key/value pair into the
//! [`SectionTree`]. The first structural error stops the scan; everything
//! committed before it stays in the tree.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::classify::is_valid_key;
use crate::convert::parse_literal;
use crate::document::Document;
use crate::error::{OmflError, Result, SyntaxError, SyntaxErrorKind};
use crate::tree::SectionTree;

/// Parse OMFL text held in memory.
///
/// Never fails outright: syntax errors are recorded in the returned
/// document, so check [`Document::valid`] before trusting it.
///
/// # Examples
///
/// ```
/// let doc = omfl_core::parse("key = 5\n");
/// assert!(doc.valid());
/// assert_eq!(doc.get("key").unwrap().as_integer().unwrap(), 5);
/// ```
pub fn parse(input: &str) -> Document {
    let mut scanner = Scanner::new();
    let error = scanner.run(input).err().map(|kind| SyntaxError {
        line: scanner.line,
        kind,
    });

    if let Some(err) = &error {
        tracing::debug!(line = err.line, reason = %err.kind, "scan halted");
    }

    Document::new(scanner.tree.into_root(), error)
}

/// Parse an OMFL file.
///
/// Fails with [`OmflError::Io`] if the file cannot be opened or read; syntax
/// errors are reported through the document as with [`parse`].
pub fn parse_file(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| OmflError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "parsing file");
    Ok(parse(&text))
}

/// Parse OMFL text from any reader.
pub fn parse_reader(mut reader: impl Read) -> Result<Document> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse(&text))
}

/// Single-pass scanner state.
struct Scanner {
    tree: SectionTree,
    /// Path of the most recent section header.
    section: Vec<String>,
    key: String,
    value: String,
    /// 1-based line currently being scanned.
    line: usize,
    equals_seen: bool,
    in_string: bool,
    in_comment: bool,
}

impl Scanner {
    fn new() -> Self {
        Self {
            tree: SectionTree::new(),
            section: Vec::new(),
            key: String::new(),
            value: String::new(),
            line: 1,
            equals_seen: false,
            in_string: false,
            in_comment: false,
        }
    }

    fn run(&mut self, input: &str) -> std::result::Result<(), SyntaxErrorKind> {
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\r' if chars.peek() == Some(&'\n') => {}
                '\n' => self.end_line()?,
                _ if self.in_comment => {}
                '"' if self.equals_seen => {
                    self.in_string = !self.in_string;
                    self.value.push(c);
                }
                _ if self.in_string => self.value.push(c),
                '#' => self.in_comment = true,
                '[' if !self.equals_seen => {
                    let header: String = chars.by_ref().take_while(|&c| c != '\n').collect();
                    self.section_header(&header)?;
                    self.line += 1;
                }
                '=' if self.equals_seen => return Err(SyntaxErrorKind::DuplicateEquals),
                '=' => self.equals_seen = true,
                _ if self.equals_seen => self.value.push(c),
                _ => self.key.push(c),
            }
        }

        self.commit()
    }

    /// Handle the text after `[` up to (not including) the newline.
    fn section_header(&mut self, header: &str) -> std::result::Result<(), SyntaxErrorKind> {
        let stray = self.key.trim_matches(' ');
        if !stray.is_empty() {
            return Err(SyntaxErrorKind::StrayKeyBeforeSection(stray.to_string()));
        }
        self.key.clear();

        let header = header.strip_suffix('\r').unwrap_or(header);
        let close = header
            .find(']')
            .ok_or(SyntaxErrorKind::UnterminatedSectionHeader)?;

        let trailing = header[close + 1..].trim_matches(' ');
        if !trailing.is_empty() && !trailing.starts_with('#') {
            return Err(SyntaxErrorKind::TrailingSectionContent(
                trailing.to_string(),
            ));
        }

        let mut path = Vec::new();
        for name in header[..close].split('.') {
            if !is_valid_key(name) {
                return Err(SyntaxErrorKind::InvalidSectionName(name.to_string()));
            }
            path.push(name.to_string());
        }

        self.tree.ensure_section(&path)?;
        tracing::trace!(section = %path.join("."), line = self.line, "entering section");
        self.section = path;
        Ok(())
    }

    fn end_line(&mut self) -> std::result::Result<(), SyntaxErrorKind> {
        self.commit()?;
        self.equals_seen = false;
        self.in_string = false;
        self.in_comment = false;
        self.line += 1;
        Ok(())
    }

    /// Validate the buffered pair and insert it into the tree.
    fn commit(&mut self) -> std::result::Result<(), SyntaxErrorKind> {
        let key = self.key.trim_matches(' ');
        let literal = self.value.trim_matches(' ');

        if key.is_empty() && literal.is_empty() {
            self.key.clear();
            self.value.clear();
            return Ok(());
        }

        if !is_valid_key(key) {
            return Err(SyntaxErrorKind::InvalidKey(key.to_string()));
        }
        if !self.equals_seen {
            return Err(SyntaxErrorKind::MissingEquals(key.to_string()));
        }

        let value = parse_literal(literal)?;
        tracing::trace!(key, kind = %value.kind(), line = self.line, "committing value");
        self.tree.insert(&self.section, key, value)?;

        self.key.clear();
        self.value.clear();
        Ok(())
    }
}
