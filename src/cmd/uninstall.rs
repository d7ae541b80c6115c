//! Removing installed commands — `git-workflows uninstall`.

use anyhow::Result;
use dialoguer::Confirm;

use git_workflows::config::InstallerConfig;
use git_workflows::uninstall;
use git_workflows::ui::Reporter;

pub fn cmd_uninstall(config: &InstallerConfig, ui: &Reporter, force: bool) -> Result<()> {
    ui.paths(config);

    if !config.target_dir.is_dir() {
        println!();
        println!("Nothing to uninstall: {} does not exist.", config.target_dir.display());
        return Ok(());
    }

    if !force {
        let confirm = Confirm::new()
            .with_prompt(format!(
                "Remove git-workflows commands from {}?",
                config.target_dir.display()
            ))
            .default(false)
            .interact()
            .unwrap_or(false);

        if !confirm {
            ui.cancelled();
            return Ok(());
        }
    }

    println!();
    let removals = uninstall::run(config)?;
    for removal in &removals {
        ui.removal(removal);
    }
    ui.uninstall_summary(&removals);

    Ok(())
}
