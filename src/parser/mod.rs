//! Parser layer
//! - line.rs: single-line `# helm:autoupdate:` annotation parser
//! - file.rs: file model (lines + pending updates)
//! - scan.rs: directory walk with filename filters
//! - error.rs: scan errors

pub mod error;
pub mod file;
pub mod line;
pub mod scan;

pub use error::ScanError;
pub use file::{ParsedFile, PendingUpdate, parse_content, parse_file};
pub use line::{AnnotatedLine, MARKER, parse_line, render};
pub use scan::{DirectoryScanner, path_to_load};
