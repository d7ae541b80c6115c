//! Typed error hierarchy for the installer.
//!
//! Everything the library can fail with lives in [`InstallError`]. Symlink
//! failures never show up here: they are absorbed by the copy fallback and
//! surface as [`crate::install::InstallOutcome::Copied`] instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from resolving, enumerating, installing or removing command files.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("No command files found in {}", dir.display())]
    NoCommandFiles { dir: PathBuf },

    #[error("Failed to read commands directory {}: {source}", dir.display())]
    SourceUnreadable {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine the home directory")]
    NoHomeDirectory,

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to inspect {}: {source}", path.display())]
    InspectFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to back up {} to {}: {source}", path.display(), backup.display())]
    BackupFailed {
        path: PathBuf,
        backup: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {} to {}: {source}", from.display(), to.display())]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove {}: {source}", path.display())]
    RemoveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to restore backup {} to {}: {source}", backup.display(), path.display())]
    RestoreFailed {
        backup: PathBuf,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
