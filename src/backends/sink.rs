//! Report output
//!
//! Files are written through a temporary file in the destination directory
//! and renamed into place, so a failed write never leaves a partial report.
//! New reports are world-readable (0644); replaced reports keep their mode.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::backends::picker::STDOUT_PATH;
use crate::core::error::OutputError;

/// Mode for newly created report files
#[cfg(unix)]
const REPORT_MODE: u32 = 0o644;

/// Permissions the persisted report should carry
#[cfg(unix)]
fn report_permissions(path: &Path) -> fs::Permissions {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .map(|meta| meta.permissions())
        .unwrap_or_else(|_| fs::Permissions::from_mode(REPORT_MODE))
}

/// Write `contents` to `path`, or to stdout when `path` is `-`
pub fn write_report(path: &Path, contents: &str) -> Result<(), OutputError> {
    let to_error = |source: io::Error| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    if path.as_os_str() == STDOUT_PATH {
        let mut stdout = io::stdout().lock();
        stdout.write_all(contents.as_bytes()).map_err(to_error)?;
        return stdout.flush().map_err(to_error);
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(to_error)?;
    file.write_all(contents.as_bytes()).map_err(to_error)?;
    #[cfg(unix)]
    file.as_file()
        .set_permissions(report_permissions(path))
        .map_err(to_error)?;
    file.as_file().sync_all().map_err(to_error)?;
    file.persist(path).map_err(|err| to_error(err.error))?;

    log::debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_report_creates_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("report.txt");

        write_report(&path, "the;2;0.5").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "the;2;0.5");
    }

    #[test]
    fn test_write_report_replaces_existing() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("report.txt");
        fs::write(&path, "old contents that are longer").unwrap();

        write_report(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_report_missing_directory() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing").join("report.txt");

        let err = write_report(&path, "x").unwrap_err();
        assert!(matches!(err, OutputError::Write { .. }));
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_new_report_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        let path = temp.path().join("report.txt");

        write_report(&path, "x").unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_replaced_report_keeps_its_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        let path = temp.path().join("report.txt");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        write_report(&path, "new").unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_report_leaves_no_temp_files() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("report.txt");

        write_report(&path, "a;1").unwrap();
        let entries = fs::read_dir(temp.path()).unwrap().count();
        assert_eq!(entries, 1);
    }
}
