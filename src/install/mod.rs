//! Command installation.
//!
//! Each command file goes through the same linear contract, independent of
//! every other file:
//!
//! | Destination before run | Action                                   | Outcome            |
//! |------------------------|------------------------------------------|--------------------|
//! | absent                 | symlink to source, copy if that fails    | `Linked`/`Copied`  |
//! | symlink (any target)   | nothing                                  | `Skipped`          |
//! | anything else          | copy to `<name>.backup`, remove, install | `Linked`/`Copied`  |
//!
//! A run discovers the command files first, so an empty `commands/`
//! directory aborts before the target directory is touched.

pub mod link;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::commands::{self, CommandFile};
use crate::config::InstallerConfig;
use crate::errors::InstallError;

pub use link::link_or_copy;

/// Suffix appended to a pre-existing destination before it is replaced.
pub const BACKUP_SUFFIX: &str = ".backup";

/// What happened to a single command file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallOutcome {
    /// A new symlink points at the source
    Linked,
    /// Linking failed, the source was copied instead
    Copied,
    /// The destination was already a symlink
    Skipped,
}

impl InstallOutcome {
    pub fn is_installed(self) -> bool {
        matches!(self, InstallOutcome::Linked | InstallOutcome::Copied)
    }
}

/// What occupies a destination path right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Absent,
    Symlink,
    /// A regular file (or anything else that is not a symlink)
    Occupied,
}

/// Per-file result of an install run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub name: String,
    pub destination: PathBuf,
    pub outcome: InstallOutcome,
    /// Where the previous destination was saved, if one was replaced
    pub backup: Option<PathBuf>,
}

/// Aggregated results of an install run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InstallSummary {
    pub target_dir: PathBuf,
    /// Whether the run had to create `target_dir`
    pub created_target: bool,
    pub files: Vec<FileReport>,
}

impl InstallSummary {
    pub fn installed(&self) -> usize {
        self.files.iter().filter(|f| f.outcome.is_installed()).count()
    }

    pub fn skipped(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.outcome == InstallOutcome::Skipped)
            .count()
    }

    pub fn linked(&self) -> usize {
        self.count(InstallOutcome::Linked)
    }

    pub fn copied(&self) -> usize {
        self.count(InstallOutcome::Copied)
    }

    pub fn backed_up(&self) -> usize {
        self.files.iter().filter(|f| f.backup.is_some()).count()
    }

    fn count(&self, outcome: InstallOutcome) -> usize {
        self.files.iter().filter(|f| f.outcome == outcome).count()
    }
}

/// Planned action for a dry run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannedAction {
    Install,
    Skip,
    BackupAndInstall,
}

/// Progress callbacks for an install run. All methods default to no-ops.
pub trait InstallObserver {
    fn commands_found(&mut self, _files: &[CommandFile]) {}
    fn target_created(&mut self, _dir: &Path) {}
    fn file_installed(&mut self, _report: &FileReport) {}
}

/// Observer that ignores every event.
impl InstallObserver for () {}

/// Path of the backup made for `dest` (`commit.md` -> `commit.md.backup`).
pub fn backup_path(dest: &Path) -> PathBuf {
    let mut name = dest.file_name().unwrap_or_default().to_os_string();
    name.push(BACKUP_SUFFIX);
    dest.with_file_name(name)
}

/// Classify what currently sits at `dest` without following symlinks.
pub fn inspect_destination(dest: &Path) -> Result<Destination, InstallError> {
    match std::fs::symlink_metadata(dest) {
        Ok(meta) if meta.file_type().is_symlink() => Ok(Destination::Symlink),
        Ok(_) => Ok(Destination::Occupied),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Destination::Absent),
        Err(source) => Err(InstallError::InspectFailed {
            path: dest.to_path_buf(),
            source,
        }),
    }
}

/// Install one command file at `dest`.
///
/// A symlink at `dest` counts as installed regardless of where it points.
pub fn install_file(src: &Path, dest: &Path) -> Result<(InstallOutcome, Option<PathBuf>), InstallError> {
    let backup = match inspect_destination(dest)? {
        Destination::Symlink => return Ok((InstallOutcome::Skipped, None)),
        Destination::Absent => None,
        Destination::Occupied => {
            let backup = backup_path(dest);
            std::fs::copy(dest, &backup).map_err(|source| InstallError::BackupFailed {
                path: dest.to_path_buf(),
                backup: backup.clone(),
                source,
            })?;
            std::fs::remove_file(dest).map_err(|source| InstallError::RemoveFailed {
                path: dest.to_path_buf(),
                source,
            })?;
            tracing::info!(dest = %dest.display(), backup = %backup.display(), "backed up existing file");
            Some(backup)
        }
    };

    let outcome = link_or_copy(src, dest)?;
    Ok((outcome, backup))
}

/// Create the target directory if it does not exist yet.
///
/// Returns `true` when the directory was created.
pub fn ensure_target_dir(dir: &Path) -> Result<bool, InstallError> {
    if dir.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(dir).map_err(|source| InstallError::CreateDirFailed {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(true)
}

/// Install every command file from `config.source_dir` into `config.target_dir`.
pub fn run(
    config: &InstallerConfig,
    observer: &mut impl InstallObserver,
) -> Result<InstallSummary, InstallError> {
    let files = commands::discover(&config.source_dir)?;
    observer.commands_found(&files);

    let created_target = ensure_target_dir(&config.target_dir)?;
    if created_target {
        tracing::info!(dir = %config.target_dir.display(), "created commands directory");
        observer.target_created(&config.target_dir);
    }

    let mut summary = InstallSummary {
        target_dir: config.target_dir.clone(),
        created_target,
        files: Vec::with_capacity(files.len()),
    };

    for file in &files {
        let destination = config.destination(&file.name);
        let (outcome, backup) = install_file(&file.path, &destination)?;
        tracing::debug!(file = %file.name, ?outcome, "processed command file");

        let report = FileReport {
            name: file.name.clone(),
            destination,
            outcome,
            backup,
        };
        observer.file_installed(&report);
        summary.files.push(report);
    }

    Ok(summary)
}

/// Work out what `run` would do without touching the filesystem.
pub fn plan(config: &InstallerConfig) -> Result<Vec<(CommandFile, PlannedAction)>, InstallError> {
    let files = commands::discover(&config.source_dir)?;
    files
        .into_iter()
        .map(|file| {
            let action = match inspect_destination(&config.destination(&file.name))? {
                Destination::Absent => PlannedAction::Install,
                Destination::Symlink => PlannedAction::Skip,
                Destination::Occupied => PlannedAction::BackupAndInstall,
            };
            Ok((file, action))
        })
        .collect()
}
