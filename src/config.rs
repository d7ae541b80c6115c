//! Layered installer configuration.
//!
//! Settings come from three layers, highest precedence first:
//!
//! | Setting        | CLI flag     | Environment             | Default                              |
//! |----------------|--------------|-------------------------|--------------------------------------|
//! | source dir     | `--source`   | `GIT_WORKFLOWS_SOURCE`  | `commands/` one level above the binary |
//! | target dir     | `--target`   | `CLAUDE_COMMANDS_PATH`  | first existing conventional path     |
//!
//! The environment is read once while building [`InstallerConfig`]; the
//! resolved paths are then passed explicitly to every operation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::target::{ResolvedTarget, TargetCandidates, TargetOrigin};

/// Environment variable overriding the source commands directory.
pub const SOURCE_ENV: &str = "GIT_WORKFLOWS_SOURCE";

/// Name of the directory holding the command files inside the plugin.
pub const COMMANDS_DIR: &str = "commands";

/// Fully resolved settings for one installer run.
#[derive(Debug, Clone)]
pub struct InstallerConfig {
    /// Absolute path to the plugin's `commands/` directory
    pub source_dir: PathBuf,
    /// Directory the command files are installed into
    pub target_dir: PathBuf,
    /// Which rule picked `target_dir`
    pub target_origin: TargetOrigin,
}

impl InstallerConfig {
    /// Build a config from explicit paths. Used by tests and by callers that
    /// already know where everything lives.
    pub fn new(source_dir: impl Into<PathBuf>, target: ResolvedTarget) -> Result<Self> {
        let source_dir = source_dir.into();
        let source_dir = std::path::absolute(&source_dir).with_context(|| {
            format!("Failed to resolve source directory: {}", source_dir.display())
        })?;

        Ok(Self {
            source_dir,
            target_dir: target.path,
            target_origin: target.origin,
        })
    }

    /// Resolve the config from CLI overrides, then the environment, then defaults.
    ///
    /// `source` already includes `GIT_WORKFLOWS_SOURCE` when the CLI reads it
    /// through clap's `env` support.
    pub fn resolve(source: Option<PathBuf>, target: Option<PathBuf>) -> Result<Self> {
        let source_dir = match source {
            Some(dir) => dir,
            None => default_source_dir()?,
        };

        let target = match target {
            Some(path) => ResolvedTarget {
                path,
                origin: TargetOrigin::Flag,
            },
            None => TargetCandidates::from_env()?.resolve(),
        };

        let config = Self::new(source_dir, target)?;
        tracing::debug!(
            source = %config.source_dir.display(),
            target = %config.target_dir.display(),
            origin = %config.target_origin,
            "resolved installer config"
        );
        Ok(config)
    }

    /// Destination path for a command file name.
    pub fn destination(&self, file_name: &str) -> PathBuf {
        self.target_dir.join(file_name)
    }
}

/// The `commands/` directory shipped next to the installer.
///
/// The binary is expected at `<plugin>/<bin-dir>/git-workflows`, so the
/// commands live one level above the directory holding the executable. When
/// that directory is missing (e.g. running from `target/debug`), the
/// crate's own `commands/` is used if it exists.
pub fn default_source_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the installer executable")?;
    let exe_dir = exe.parent().unwrap_or(Path::new("."));
    let plugin_dir = exe_dir.parent().unwrap_or(exe_dir);
    let candidate = plugin_dir.join(COMMANDS_DIR);

    if candidate.is_dir() {
        return Ok(candidate);
    }

    let bundled = Path::new(env!("CARGO_MANIFEST_DIR")).join(COMMANDS_DIR);
    if bundled.is_dir() {
        tracing::debug!(path = %bundled.display(), "using bundled commands directory");
        return Ok(bundled);
    }

    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_new_makes_source_absolute() {
        let target = ResolvedTarget {
            path: PathBuf::from("/tmp/target"),
            origin: TargetOrigin::Flag,
        };
        let config = InstallerConfig::new("relative/commands", target).unwrap();

        assert!(config.source_dir.is_absolute());
        assert!(config.source_dir.ends_with("relative/commands"));
    }

    #[test]
    fn test_resolve_uses_explicit_paths() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("commands");
        let target = dir.path().join("target");

        let config = InstallerConfig::resolve(Some(source.clone()), Some(target.clone())).unwrap();

        assert_eq!(config.source_dir, source);
        assert_eq!(config.target_dir, target);
        assert_eq!(config.target_origin, TargetOrigin::Flag);
    }

    #[test]
    fn test_destination_joins_file_name() {
        let target = ResolvedTarget {
            path: PathBuf::from("/home/dev/.claude/commands"),
            origin: TargetOrigin::Primary,
        };
        let config = InstallerConfig::new("/plugin/commands", target).unwrap();

        assert_eq!(
            config.destination("commit.md"),
            PathBuf::from("/home/dev/.claude/commands/commit.md")
        );
    }

    #[test]
    fn test_default_source_dir_ends_with_commands() {
        let dir = default_source_dir().unwrap();
        assert!(dir.ends_with(COMMANDS_DIR));
    }
}
