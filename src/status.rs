//! Read-only view of what is installed where.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::commands::{self, CommandFile};
use crate::config::InstallerConfig;
use crate::errors::InstallError;
use crate::install::{Destination, backup_path, inspect_destination};
use crate::target::TargetOrigin;

/// Installed state of one command file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum InstallState {
    /// Nothing at the destination
    Missing,
    /// Symlink to this plugin's source file
    Linked,
    /// Symlink to some other path; `install` leaves these alone
    LinkedElsewhere { points_to: PathBuf },
    /// Regular file identical to the source
    Copied,
    /// Regular file that differs from the source
    Modified,
}

impl InstallState {
    /// Whether the host tool will pick up this plugin's version of the command.
    pub fn is_current(&self) -> bool {
        matches!(self, InstallState::Linked | InstallState::Copied)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CommandStatus {
    pub name: String,
    pub destination: PathBuf,
    #[serde(flatten)]
    pub state: InstallState,
    pub has_backup: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub source_dir: PathBuf,
    pub target_dir: PathBuf,
    pub target_origin: TargetOrigin,
    pub target_exists: bool,
    pub commands: Vec<CommandStatus>,
}

impl StatusReport {
    pub fn current(&self) -> usize {
        self.commands.iter().filter(|c| c.state.is_current()).count()
    }
}

/// Resolve a symlink's target relative to the link's own directory.
fn link_target(dest: &Path) -> Result<PathBuf, InstallError> {
    let target = std::fs::read_link(dest).map_err(|source| InstallError::InspectFailed {
        path: dest.to_path_buf(),
        source,
    })?;
    if target.is_absolute() {
        Ok(target)
    } else {
        Ok(dest.parent().unwrap_or(Path::new(".")).join(target))
    }
}

fn same_path(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

fn same_contents(a: &Path, b: &Path) -> Result<bool, InstallError> {
    let read = |path: &Path| {
        std::fs::read(path).map_err(|source| InstallError::InspectFailed {
            path: path.to_path_buf(),
            source,
        })
    };
    Ok(read(a)? == read(b)?)
}

/// Classify the destination of one command file.
pub fn classify(src: &Path, dest: &Path) -> Result<InstallState, InstallError> {
    match inspect_destination(dest)? {
        Destination::Absent => Ok(InstallState::Missing),
        Destination::Symlink => {
            let points_to = link_target(dest)?;
            if same_path(&points_to, src) {
                Ok(InstallState::Linked)
            } else {
                Ok(InstallState::LinkedElsewhere { points_to })
            }
        }
        Destination::Occupied => {
            if dest.is_file() && same_contents(src, dest)? {
                Ok(InstallState::Copied)
            } else {
                Ok(InstallState::Modified)
            }
        }
    }
}

fn command_status(config: &InstallerConfig, file: &CommandFile) -> Result<CommandStatus, InstallError> {
    let destination = config.destination(&file.name);
    let state = classify(&file.path, &destination)?;
    Ok(CommandStatus {
        name: file.name.clone(),
        has_backup: backup_path(&destination).exists(),
        destination,
        state,
    })
}

/// Inspect every command file against the target directory.
pub fn inspect(config: &InstallerConfig) -> Result<StatusReport, InstallError> {
    let files = commands::discover(&config.source_dir)?;
    let commands = files
        .iter()
        .map(|file| command_status(config, file))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(StatusReport {
        source_dir: config.source_dir.clone(),
        target_dir: config.target_dir.clone(),
        target_origin: config.target_origin,
        target_exists: config.target_dir.is_dir(),
        commands,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::install;
    use crate::target::ResolvedTarget;
    use tempfile::tempdir;

    fn config_in(root: &Path) -> InstallerConfig {
        let source = root.join("commands");
        std::fs::create_dir_all(&source).unwrap();
        std::fs::write(source.join("commit.md"), "# commit").unwrap();
        std::fs::write(source.join("sync.md"), "# sync").unwrap();
        let target = ResolvedTarget {
            path: root.join("target"),
            origin: TargetOrigin::Flag,
        };
        InstallerConfig::new(source, target).unwrap()
    }

    #[test]
    fn test_inspect_before_install() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());

        let report = inspect(&config).unwrap();

        assert!(!report.target_exists);
        assert_eq!(report.commands.len(), 2);
        assert!(report.commands.iter().all(|c| c.state == InstallState::Missing));
        assert_eq!(report.current(), 0);
    }

    #[test]
    fn test_inspect_after_install() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        install::run(&config, &mut ()).unwrap();

        let report = inspect(&config).unwrap();

        assert!(report.target_exists);
        assert_eq!(report.current(), 2);
    }

    #[test]
    fn test_classify_copied_and_modified() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("commit.md");
        let dest = dir.path().join("installed.md");
        std::fs::write(&src, "# commit").unwrap();

        std::fs::write(&dest, "# commit").unwrap();
        assert_eq!(classify(&src, &dest).unwrap(), InstallState::Copied);

        std::fs::write(&dest, "# commit, edited").unwrap();
        assert_eq!(classify(&src, &dest).unwrap(), InstallState::Modified);
    }

    #[cfg(unix)]
    #[test]
    fn test_classify_symlinks() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("commit.md");
        let other = dir.path().join("other.md");
        std::fs::write(&src, "# commit").unwrap();
        std::fs::write(&other, "# other").unwrap();

        let linked = dir.path().join("linked.md");
        std::os::unix::fs::symlink(&src, &linked).unwrap();
        assert_eq!(classify(&src, &linked).unwrap(), InstallState::Linked);

        let foreign = dir.path().join("foreign.md");
        std::os::unix::fs::symlink(&other, &foreign).unwrap();
        assert_eq!(
            classify(&src, &foreign).unwrap(),
            InstallState::LinkedElsewhere { points_to: other }
        );
    }

    #[test]
    fn test_status_serializes_state_tag() {
        let status = CommandStatus {
            name: "commit.md".to_string(),
            destination: PathBuf::from("/t/commit.md"),
            state: InstallState::Linked,
            has_backup: false,
        };
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["state"], "linked");
        assert_eq!(json["name"], "commit.md");
    }
}
