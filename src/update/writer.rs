//! Persists modified files

use std::fs;

use tracing::info;

use crate::parser::file::ParsedFile;
use crate::update::error::WriteError;

/// Write each file back to its path, restoring the permissions read at scan
/// time
///
/// Stops at the first failure; files after it are left untouched on disk.
pub fn write_changes_to_filesystem(files: &[ParsedFile]) -> Result<(), WriteError> {
    for file in files {
        let to_write_error = |source| WriteError {
            path: file.path.clone(),
            source,
        };

        fs::write(&file.path, file.to_bytes()).map_err(to_write_error)?;
        if let Some(permissions) = &file.permissions {
            fs::set_permissions(&file.path, permissions.clone()).map_err(to_write_error)?;
        }

        info!("Wrote {:?}", file.path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::file::{PendingUpdate, parse_content, parse_file};
    use tempfile::TempDir;

    #[test]
    fn write_changes_to_filesystem_writes_updated_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("release.yaml");
        fs::write(&path, "a: b\n  version: 0.3.6 # helm:autoupdate:cni\n").unwrap();
        let mut file = parse_file(&path).unwrap().unwrap();
        let update = file.pending_updates[0].clone();
        let update = PendingUpdate {
            parsed: update.parsed.with_version("99.99.99"),
            ..update
        };
        file.apply_update(&update);

        write_changes_to_filesystem(&[file]).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "a: b\n  version: 99.99.99 # helm:autoupdate:cni\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn write_changes_to_filesystem_preserves_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("release.yaml");
        fs::write(&path, "v: 1 # helm:autoupdate:x").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();
        let file = parse_file(&path).unwrap().unwrap();

        write_changes_to_filesystem(&[file]).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }

    #[test]
    fn write_changes_to_filesystem_stops_at_first_failure() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("good.yaml");
        fs::write(&good, "v: 1 # helm:autoupdate:x").unwrap();

        let mut missing = parse_content("v: 2 # helm:autoupdate:x");
        missing.path = temp_dir.path().join("no-such-dir").join("missing.yaml");
        let mut untouched = parse_file(&good).unwrap().unwrap();
        untouched.lines[0] = "v: 3 # helm:autoupdate:x".to_string();

        let result = write_changes_to_filesystem(&[missing, untouched]);

        assert!(matches!(result, Err(WriteError { ref path, .. }) if path.ends_with("missing.yaml")));
        assert_eq!(fs::read_to_string(&good).unwrap(), "v: 1 # helm:autoupdate:x");
    }
}
