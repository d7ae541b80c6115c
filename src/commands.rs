//! Command file discovery.
//!
//! A command file is any `*.md` entry in the plugin's `commands/` directory.
//! Discovery is a flat listing (no recursion) sorted by file name so that
//! runs are reproducible across platforms.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::errors::InstallError;

/// Extension that marks a command definition.
pub const COMMAND_EXTENSION: &str = ".md";

/// A slash-command definition shipped by the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandFile {
    /// File name, e.g. `commit.md`
    pub name: String,
    /// Full path to the source file
    pub path: PathBuf,
}

impl CommandFile {
    pub fn new(dir: &Path, name: &str) -> Self {
        Self {
            name: name.to_string(),
            path: dir.join(name),
        }
    }

    /// The slash command the host tool exposes for this file (`/commit`).
    pub fn slash_name(&self) -> String {
        format!(
            "/{}",
            self.name
                .strip_suffix(COMMAND_EXTENSION)
                .unwrap_or(self.name.as_str())
        )
    }
}

/// Whether a file name looks like a command definition.
pub fn is_command_file_name(name: &str) -> bool {
    name.ends_with(COMMAND_EXTENSION)
}

/// List the command files in `dir`, sorted by name. May be empty.
pub fn list_command_files(dir: &Path) -> Result<Vec<CommandFile>, InstallError> {
    let entries = std::fs::read_dir(dir).map_err(|source| InstallError::SourceUnreadable {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| InstallError::SourceUnreadable {
            dir: dir.to_path_buf(),
            source,
        })?;

        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            tracing::warn!(entry = ?entry.file_name(), "skipping non UTF-8 file name");
            continue;
        };

        if !is_command_file_name(&name) {
            continue;
        }

        if entry.path().is_dir() {
            tracing::debug!(%name, "skipping directory with command extension");
            continue;
        }

        files.push(CommandFile::new(dir, &name));
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

/// List the command files in `dir`, treating an empty payload as an error.
pub fn discover(dir: &Path) -> Result<Vec<CommandFile>, InstallError> {
    let files = list_command_files(dir)?;
    if files.is_empty() {
        return Err(InstallError::NoCommandFiles {
            dir: dir.to_path_buf(),
        });
    }
    tracing::debug!(count = files.len(), dir = %dir.display(), "discovered command files");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), format!("# {}\n", name)).unwrap();
    }

    #[test]
    fn test_is_command_file_name() {
        assert!(is_command_file_name("commit.md"));
        assert!(!is_command_file_name("commit.md.backup"));
        assert!(!is_command_file_name("README.txt"));
        assert!(!is_command_file_name("notes.MD"));
    }

    #[test]
    fn test_slash_name() {
        let file = CommandFile::new(Path::new("/plugin/commands"), "pr-review.md");
        assert_eq!(file.slash_name(), "/pr-review");
        assert_eq!(file.path, PathBuf::from("/plugin/commands/pr-review.md"));
    }

    #[test]
    fn test_list_filters_and_sorts() {
        let dir = tempdir().unwrap();
        write(dir.path(), "sync.md");
        write(dir.path(), "commit.md");
        write(dir.path(), "README.txt");
        write(dir.path(), "branch.md");

        let files = list_command_files(dir.path()).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();

        assert_eq!(names, vec!["branch.md", "commit.md", "sync.md"]);
    }

    #[test]
    fn test_list_skips_directories() {
        let dir = tempdir().unwrap();
        write(dir.path(), "commit.md");
        std::fs::create_dir(dir.path().join("drafts.md")).unwrap();

        let files = list_command_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "commit.md");
    }

    #[test]
    fn test_discover_empty_is_error() {
        let dir = tempdir().unwrap();
        write(dir.path(), "README.txt");

        let err = discover(dir.path()).unwrap_err();
        assert!(matches!(err, InstallError::NoCommandFiles { .. }));
    }

    #[test]
    fn test_discover_missing_dir_is_error() {
        let dir = tempdir().unwrap();
        let err = discover(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, InstallError::SourceUnreadable { .. }));
    }
}
