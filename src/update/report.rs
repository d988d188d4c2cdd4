//! Summary of the version changes applied to modified files

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::parser::file::ParsedFile;
use crate::parser::line::parse_line;

/// One rewritten line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Change {
    pub path: PathBuf,
    /// Line number (1-indexed)
    pub line: usize,
    pub identity: String,
    pub from: String,
    pub to: String,
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {} {} -> {}",
            self.path.display(),
            self.line,
            self.identity,
            self.from,
            self.to
        )
    }
}

/// Compare each file's current lines with the requests captured at scan time
pub fn collect_changes(files: &[ParsedFile]) -> Vec<Change> {
    files
        .iter()
        .flat_map(|file| {
            file.pending_updates.iter().filter_map(move |request| {
                let current = parse_line(&file.lines[request.line_number])?;
                (current.current_version != request.parsed.current_version).then(|| Change {
                    path: file.path.clone(),
                    line: request.line_number + 1,
                    identity: request.parsed.identity.clone(),
                    from: request.parsed.current_version.clone(),
                    to: current.current_version,
                })
            })
        })
        .collect()
}
