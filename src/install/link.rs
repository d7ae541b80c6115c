//! Symlink-then-copy primitive.

use std::io;
use std::path::Path;

use super::InstallOutcome;
use crate::errors::InstallError;

#[cfg(unix)]
fn symlink_file(src: &Path, dest: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dest)
}

#[cfg(windows)]
fn symlink_file(src: &Path, dest: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(src, dest)
}

#[cfg(not(any(unix, windows)))]
fn symlink_file(_src: &Path, _dest: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "symbolic links are not supported on this platform",
    ))
}

/// Link `dest` to `src`, falling back to a plain copy.
///
/// `dest` must not exist. A failed link is never an error; only a failed
/// copy is.
pub fn link_or_copy(src: &Path, dest: &Path) -> Result<InstallOutcome, InstallError> {
    match symlink_file(src, dest) {
        Ok(()) => Ok(InstallOutcome::Linked),
        Err(err) => {
            tracing::debug!(
                src = %src.display(),
                dest = %dest.display(),
                error = %err,
                "symlink failed, copying instead"
            );
            std::fs::copy(src, dest).map_err(|source| InstallError::CopyFailed {
                from: src.to_path_buf(),
                to: dest.to_path_buf(),
                source,
            })?;
            Ok(InstallOutcome::Copied)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[cfg(unix)]
    #[test]
    fn test_link_or_copy_prefers_symlink() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("commit.md");
        let dest = dir.path().join("installed.md");
        std::fs::write(&src, "# commit").unwrap();

        let outcome = link_or_copy(&src, &dest).unwrap();

        assert_eq!(outcome, InstallOutcome::Linked);
        assert_eq!(std::fs::read_link(&dest).unwrap(), src);
    }

    #[test]
    fn test_link_or_copy_falls_back_to_copy() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("commit.md");
        std::fs::write(&src, "# commit").unwrap();

        // A destination that already exists makes the symlink fail but lets
        // the copy overwrite it.
        let dest = dir.path().join("installed.md");
        std::fs::write(&dest, "stale").unwrap();

        let outcome = link_or_copy(&src, &dest).unwrap();

        assert_eq!(outcome, InstallOutcome::Copied);
        assert!(!dest.symlink_metadata().unwrap().file_type().is_symlink());
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "# commit");
    }

    #[test]
    fn test_link_or_copy_reports_copy_failure() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("missing.md");
        let dest = dir.path().join("no-such-dir").join("installed.md");

        let err = link_or_copy(&src, &dest).unwrap_err();
        assert!(matches!(err, InstallError::CopyFailed { .. }));
    }
}
