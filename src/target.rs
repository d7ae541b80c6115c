//! Target directory resolution.
//!
//! The host tool looks for slash commands in one of a few well-known places.
//! Resolution walks an ordered candidate list and picks the first directory
//! that already exists:
//!
//! 1. `$CLAUDE_COMMANDS_PATH`, when set
//! 2. `~/.claude/commands`
//! 3. `~/.config/Claude/commands`
//!
//! When none exist the primary path (`~/.claude/commands`) is returned and the
//! installer creates it. Resolution never fails once the candidates are known.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::errors::InstallError;

/// Environment variable naming an extra, highest-precedence target candidate.
pub const COMMANDS_PATH_ENV: &str = "CLAUDE_COMMANDS_PATH";

/// How the target directory was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetOrigin {
    /// Passed explicitly with `--target`
    Flag,
    /// `$CLAUDE_COMMANDS_PATH` existed on disk
    Environment,
    /// `~/.claude/commands` existed on disk
    Primary,
    /// `~/.config/Claude/commands` existed on disk
    Secondary,
    /// Nothing existed, falling back to the primary path
    Default,
}

impl fmt::Display for TargetOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetOrigin::Flag => write!(f, "--target"),
            TargetOrigin::Environment => write!(f, "${}", COMMANDS_PATH_ENV),
            TargetOrigin::Primary => write!(f, "existing"),
            TargetOrigin::Secondary => write!(f, "existing, alternate location"),
            TargetOrigin::Default => write!(f, "default, will be created"),
        }
    }
}

/// A resolved target directory together with the rule that selected it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub path: PathBuf,
    pub origin: TargetOrigin,
}

/// Ordered list of places the commands directory may live.
#[derive(Debug, Clone)]
pub struct TargetCandidates {
    override_dir: Option<PathBuf>,
    primary: PathBuf,
    secondary: PathBuf,
}

impl TargetCandidates {
    /// Build the candidate list for the given home directory.
    ///
    /// An empty override is treated the same as an unset one.
    pub fn new(home: &Path, override_dir: Option<PathBuf>) -> Self {
        Self {
            override_dir: override_dir.filter(|p| !p.as_os_str().is_empty()),
            primary: home.join(".claude").join("commands"),
            secondary: home.join(".config").join("Claude").join("commands"),
        }
    }

    /// Build the candidate list from the process environment.
    ///
    /// `CLAUDE_COMMANDS_PATH` is read once here; nothing downstream touches
    /// the environment again.
    pub fn from_env() -> Result<Self, InstallError> {
        let home = dirs::home_dir().ok_or(InstallError::NoHomeDirectory)?;
        let override_dir = std::env::var_os(COMMANDS_PATH_ENV).map(PathBuf::from);
        Ok(Self::new(&home, override_dir))
    }

    /// Candidates in precedence order.
    pub fn candidates(&self) -> Vec<(&Path, TargetOrigin)> {
        let mut list = Vec::with_capacity(3);
        if let Some(dir) = &self.override_dir {
            list.push((dir.as_path(), TargetOrigin::Environment));
        }
        list.push((self.primary.as_path(), TargetOrigin::Primary));
        list.push((self.secondary.as_path(), TargetOrigin::Secondary));
        list
    }

    /// Return the first candidate that exists, or the primary path.
    pub fn resolve(&self) -> ResolvedTarget {
        for (path, origin) in self.candidates() {
            if path.exists() {
                tracing::debug!(path = %path.display(), %origin, "target candidate exists");
                return ResolvedTarget {
                    path: path.to_path_buf(),
                    origin,
                };
            }
            tracing::debug!(path = %path.display(), "target candidate missing");
        }

        ResolvedTarget {
            path: self.primary.clone(),
            origin: TargetOrigin::Default,
        }
    }
}
