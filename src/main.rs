use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use git_workflows::config::InstallerConfig;
use git_workflows::logging;
use git_workflows::ui::{ColorChoice, Reporter};

mod cmd;

#[derive(Parser)]
#[command(name = "git-workflows")]
#[command(version, about = "Install the git-workflows slash commands into Claude Code")]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// When to use colors in the output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, global = true)]
    pub color: ColorChoice,

    /// Directory containing the command files. Defaults to `commands/` next to the installer.
    #[arg(long, global = true, env = "GIT_WORKFLOWS_SOURCE")]
    pub source: Option<PathBuf>,

    /// Install into this directory instead of resolving the Claude commands directory
    #[arg(long, global = true)]
    pub target: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Symlink (or copy) every command file into the Claude commands directory
    Install {
        /// Show what would be done without changing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Show which command files are installed
    Status {
        /// Print the status as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove the installed command files and restore backups
    Uninstall {
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ui = Reporter::new(cli.color);
    if let Err(err) = run(&cli, &mut ui) {
        tracing::debug!(error = ?err, "installer failed");
        ui.fatal(&err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, ui: &mut Reporter) -> Result<()> {
    let config = InstallerConfig::resolve(cli.source.clone(), cli.target.clone())?;

    match cli.command.clone().unwrap_or(Commands::Install { dry_run: false }) {
        Commands::Install { dry_run } => cmd::cmd_install(&config, ui, dry_run)?,
        Commands::Status { json } => cmd::cmd_status(&config, ui, json)?,
        Commands::Uninstall { force } => cmd::cmd_uninstall(&config, ui, force)?,
    }

    Ok(())
}
