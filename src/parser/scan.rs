//! Directory walk collecting files with annotated lines

use std::fs;
use std::path::PathBuf;

use regex::Regex;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::parser::error::ScanError;
use crate::parser::file::{ParsedFile, parse_file};

/// Check whether a path passes the filename filters
///
/// An empty filter list lets every path through. Patterns are searched
/// anywhere in the path, not anchored.
pub fn path_to_load(filters: &[Regex], path: &str) -> bool {
    filters.is_empty() || filters.iter().any(|r| r.is_match(path))
}

/// Walks a directory tree looking for annotated files
pub struct DirectoryScanner {
    dir: PathBuf,
}

impl DirectoryScanner {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Parse every regular file passing `filters` and return those that
    /// carry at least one annotation, in walk order
    ///
    /// Any read or stat failure aborts the whole scan. Files that are not
    /// UTF-8 text are skipped.
    pub fn find_requested_changes(&self, filters: &[Regex]) -> Result<Vec<ParsedFile>, ScanError> {
        let mut found = Vec::new();

        for entry in WalkDir::new(&self.dir).sort_by_file_name() {
            let entry = entry.map_err(|source| ScanError::Walk {
                path: self.dir.clone(),
                source,
            })?;
            let path = entry.path();

            // Follows symlinks, unlike the walk itself
            let metadata = fs::metadata(path).map_err(|source| ScanError::Stat {
                path: path.to_path_buf(),
                source,
            })?;
            if metadata.is_dir() {
                continue;
            }

            if !path_to_load(filters, &path.to_string_lossy()) {
                debug!("Skipping {:?}: filtered by filename_regex", path);
                continue;
            }

            match parse_file(path)? {
                Some(parsed) if !parsed.pending_updates.is_empty() => found.push(parsed),
                _ => {}
            }
        }

        info!(
            "Found {} annotated file(s) under {:?}",
            found.len(),
            self.dir
        );
        Ok(found)
    }
}
