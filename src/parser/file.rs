//! In-memory model of a scanned file

use std::fs::{self, Permissions};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::parser::error::ScanError;
use crate::parser::line::{AnnotatedLine, parse_line, render};

/// A requested update: an annotated line and where it lives in the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpdate {
    /// Line number (0-indexed) into `ParsedFile::lines`
    pub line_number: usize,
    pub parsed: AnnotatedLine,
}

/// A file split into lines, with every annotated line recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFile {
    /// Path the file was read from (empty for content parsed in memory)
    pub path: PathBuf,
    /// Permissions at read time, restored on write
    pub permissions: Option<Permissions>,
    /// Content exactly as read, never mutated
    pub original_content: String,
    pub lines: Vec<String>,
    pub pending_updates: Vec<PendingUpdate>,
}

impl ParsedFile {
    /// Overwrite the target line with the rendered update
    ///
    /// The caller is expected to have already set the new version on
    /// `update.parsed`.
    pub fn apply_update(&mut self, update: &PendingUpdate) {
        self.lines[update.line_number] = render(&update.parsed);
    }

    /// Join lines back together with `\n`
    pub fn to_bytes(&self) -> Vec<u8> {
        self.lines.join("\n").into_bytes()
    }

    /// True when at least one line differs from the original content
    pub fn is_modified(&self) -> bool {
        self.lines.join("\n") != self.original_content
    }
}

/// Split content into lines and collect annotated lines
///
/// Splitting is on `\n` only, so a trailing newline yields a trailing empty
/// line and `to_bytes` reproduces the input.
pub fn parse_content(content: &str) -> ParsedFile {
    let lines: Vec<String> = content.split('\n').map(str::to_string).collect();

    let pending_updates = lines
        .iter()
        .enumerate()
        .filter_map(|(line_number, line)| {
            parse_line(line).map(|parsed| PendingUpdate {
                line_number,
                parsed,
            })
        })
        .collect();

    ParsedFile {
        path: PathBuf::new(),
        permissions: None,
        original_content: content.to_string(),
        lines,
        pending_updates,
    }
}

/// Read a file from disk and parse it, recording its path and permissions
///
/// Content that is not valid UTF-8 cannot carry an annotation; such files
/// yield `None` instead of an error.
pub fn parse_file(path: &Path) -> Result<Option<ParsedFile>, ScanError> {
    let bytes = fs::read(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(_) => {
            debug!("Skipping {:?}: not UTF-8 text", path);
            return Ok(None);
        }
    };
    let metadata = fs::metadata(path).map_err(|source| ScanError::Stat {
        path: path.to_path_buf(),
        source,
    })?;

    let mut parsed = parse_content(&content);
    parsed.path = path.to_path_buf();
    parsed.permissions = Some(metadata.permissions());

    debug!(
        "Parsed {:?}: {} lines, {} annotated",
        path,
        parsed.lines.len(),
        parsed.pending_updates.len()
    );

    Ok(Some(parsed))
}
