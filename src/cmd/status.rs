//! Installed-state report — `git-workflows status`.

use anyhow::{Context, Result};

use git_workflows::config::InstallerConfig;
use git_workflows::status;
use git_workflows::ui::Reporter;

pub fn cmd_status(config: &InstallerConfig, ui: &Reporter, json: bool) -> Result<()> {
    let report = status::inspect(config)?;

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize status")?;
        println!("{}", out);
        return Ok(());
    }

    ui.paths(config);
    ui.status(&report);
    Ok(())
}
