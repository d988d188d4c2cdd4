//! Runs the resolver over every scanned file

use tracing::info;

use crate::config::AutoUpdateConfig;
use crate::parser::file::ParsedFile;
use crate::update::error::UpdateError;
use crate::update::resolver::resolve;
use crate::version::cache::CachedSource;
use crate::version::registry::VersionIndexSource;

/// Resolve and apply updates across all files, returning the modified ones
///
/// Files and their updates are processed strictly in order. Each resolved
/// update is applied immediately. The first error aborts the run and every
/// in-memory modification is dropped with `files`.
pub async fn apply_updates_to_files<S: VersionIndexSource>(
    cache: &CachedSource<S>,
    config: &AutoUpdateConfig,
    files: Vec<ParsedFile>,
) -> Result<Vec<ParsedFile>, UpdateError> {
    let mut modified = Vec::new();

    for mut file in files {
        let mut applied = 0;

        // Resolution reads the lines captured at scan time, never the
        // already-rewritten ones
        for request in file.pending_updates.clone() {
            if let Some(update) = resolve(&request, config, cache).await? {
                file.apply_update(&update);
                applied += 1;
            }
        }

        if file.is_modified() {
            info!("{} update(s) pending for {:?}", applied, file.path);
            modified.push(file);
        }
    }

    Ok(modified)
}
