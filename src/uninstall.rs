//! Removing installed commands.
//!
//! Only destinations this plugin put there are removed: symlinks to the
//! source file and copies identical to it. When a removed destination has a
//! `<name>.backup` next to it, the backup is moved back into place.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::InstallerConfig;
use crate::errors::InstallError;
use crate::install::backup_path;
use crate::status::{self, InstallState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RemovalOutcome {
    /// The installed command was removed
    Removed { restored: Option<PathBuf> },
    /// The destination belongs to someone else and was left in place
    Kept { state: InstallState },
    /// Nothing was installed
    NotInstalled,
}

#[derive(Debug, Clone, Serialize)]
pub struct RemovalReport {
    pub name: String,
    pub destination: PathBuf,
    #[serde(flatten)]
    pub outcome: RemovalOutcome,
}

impl RemovalReport {
    pub fn is_removed(&self) -> bool {
        matches!(self.outcome, RemovalOutcome::Removed { .. })
    }
}

/// Remove every installed command file of this plugin from the target directory.
pub fn run(config: &InstallerConfig) -> Result<Vec<RemovalReport>, InstallError> {
    let report = status::inspect(config)?;
    let mut removals = Vec::with_capacity(report.commands.len());

    for command in report.commands {
        let outcome = match command.state {
            InstallState::Missing => RemovalOutcome::NotInstalled,
            InstallState::Linked | InstallState::Copied => {
                std::fs::remove_file(&command.destination).map_err(|source| {
                    InstallError::RemoveFailed {
                        path: command.destination.clone(),
                        source,
                    }
                })?;

                let backup = backup_path(&command.destination);
                let restored = if backup.is_file() {
                    std::fs::rename(&backup, &command.destination).map_err(|source| {
                        InstallError::RestoreFailed {
                            backup: backup.clone(),
                            path: command.destination.clone(),
                            source,
                        }
                    })?;
                    Some(backup)
                } else {
                    None
                };

                tracing::info!(dest = %command.destination.display(), restored = restored.is_some(), "removed command");
                RemovalOutcome::Removed { restored }
            }
            state => {
                tracing::debug!(dest = %command.destination.display(), ?state, "keeping foreign destination");
                RemovalOutcome::Kept { state }
            }
        };

        removals.push(RemovalReport {
            name: command.name,
            destination: command.destination,
            outcome,
        });
    }

    Ok(removals)
}
