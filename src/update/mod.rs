//! Update layer
//! - resolver.rs: per-line decision against the configured chart
//! - driver.rs: applies resolved updates across files
//! - writer.rs: persists modified files
//! - report.rs: summary of applied changes
//! - error.rs: update and write errors

pub mod driver;
pub mod error;
pub mod report;
pub mod resolver;
pub mod writer;

pub use driver::apply_updates_to_files;
pub use error::{UpdateError, WriteError};
pub use report::{Change, collect_changes};
pub use resolver::{check_for_update, resolve};
pub use writer::write_changes_to_filesystem;
