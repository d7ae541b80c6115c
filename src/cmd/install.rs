//! Installing commands — `git-workflows install`.

use anyhow::{Context, Result};

use git_workflows::config::InstallerConfig;
use git_workflows::install;
use git_workflows::ui::Reporter;

pub fn cmd_install(config: &InstallerConfig, ui: &mut Reporter, dry_run: bool) -> Result<()> {
    ui.banner();
    ui.paths(config);

    if dry_run {
        let plan = install::plan(config).context("Failed to plan installation")?;
        ui.plan(&plan, config.target_dir.is_dir());
        return Ok(());
    }

    let summary = install::run(config, ui)?;
    ui.install_summary(&summary);

    Ok(())
}
