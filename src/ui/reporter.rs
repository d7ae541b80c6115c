use std::fmt::Display;
use std::path::Path;

use console::{Style, StyledObject, Term};

use crate::commands::CommandFile;
use crate::config::InstallerConfig;
use crate::install::{FileReport, InstallObserver, InstallOutcome, InstallSummary, PlannedAction};
use crate::status::{InstallState, StatusReport};
use crate::uninstall::{RemovalOutcome, RemovalReport};
use crate::ui::icons::{
    BACKUP, CHECK, CROSS, FOLDER, LINK, PACKAGE, ROCKET, SKIP, SPARKLE, TRASH, WARN, WRENCH,
};

const RULE_WIDTH: usize = 50;

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Color when writing to a terminal
    #[default]
    Auto,
    Always,
    Never,
}

/// Human-readable console output for every installer command.
///
/// Progress goes to stdout, fatal errors to stderr. The color choice is
/// applied per styled value instead of through console's global switch.
pub struct Reporter {
    out: Term,
    err: Term,
    color: ColorChoice,
}

impl Reporter {
    pub fn new(color: ColorChoice) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            color,
        }
    }

    fn paint<D>(&self, value: D, style: Style) -> StyledObject<D> {
        let style = match self.color {
            ColorChoice::Auto => style,
            ColorChoice::Always => style.force_styling(true),
            ColorChoice::Never => style.force_styling(false),
        };
        style.apply_to(value)
    }

    /// Print a line to stdout, falling back to `println!` if the terminal write fails.
    fn print_line(&self, msg: impl AsRef<str>) {
        if self.out.write_line(msg.as_ref()).is_err() {
            println!("{}", msg.as_ref());
        }
    }

    fn rule(&self) {
        self.print_line(self.paint("─".repeat(RULE_WIDTH), Style::new().cyan()).to_string());
    }

    fn info(&self, msg: impl Display) {
        self.print_line(self.paint(msg, Style::new().blue()).to_string());
    }

    pub fn banner(&self) {
        self.print_line("");
        self.print_line(
            self.paint(format!("{}git-workflows installer", WRENCH), Style::new().cyan().bold())
                .to_string(),
        );
        self.rule();
    }

    /// Show the source and target directories and how the target was picked.
    pub fn paths(&self, config: &InstallerConfig) {
        self.print_line("");
        self.info(format!("{}Plugin commands: {}", FOLDER, config.source_dir.display()));
        self.info(format!(
            "{}Claude commands directory: {} {}",
            FOLDER,
            config.target_dir.display(),
            self.paint(format!("({})", config.target_origin), Style::new().dim())
        ));
    }

    pub fn fatal(&self, err: &anyhow::Error) {
        let line = self
            .paint(format!("{}{:#}", CROSS, err), Style::new().red().bold())
            .to_string();
        if self.err.write_line("").and_then(|_| self.err.write_line(&line)).is_err() {
            eprintln!("{}", line);
        }
    }

    // =========================================
    // install
    // =========================================

    pub fn install_summary(&self, summary: &InstallSummary) {
        self.print_line("");
        self.rule();
        self.print_line(
            self.paint(format!("{}Installation complete!", SPARKLE), Style::new().green())
                .to_string(),
        );

        let mut installed = format!("   Installed: {} command(s)", summary.installed());
        if summary.copied() > 0 {
            installed.push_str(&format!(" ({} copied)", summary.copied()));
        }
        self.info(installed);

        if summary.skipped() > 0 {
            self.print_line(
                self.paint(
                    format!("   Skipped: {} command(s)", summary.skipped()),
                    Style::new().yellow(),
                )
                .to_string(),
            );
        }
        if summary.backed_up() > 0 {
            self.print_line(
                self.paint(
                    format!("   Backed up: {} file(s)", summary.backed_up()),
                    Style::new().yellow(),
                )
                .to_string(),
            );
        }

        self.print_line("");
        self.print_line(
            self.paint(
                format!("{}Restart Claude Code to use the new commands.", ROCKET),
                Style::new().cyan(),
            )
            .to_string(),
        );
        self.print_line("");
    }

    pub fn plan(&self, plan: &[(CommandFile, PlannedAction)], target_exists: bool) {
        self.print_line("");
        self.print_line(
            self.paint("Dry run, nothing will be changed:", Style::new().yellow().bold())
                .to_string(),
        );
        if !target_exists {
            self.info("   would create the Claude commands directory");
        }
        for (file, action) in plan {
            let line = match action {
                PlannedAction::Install => {
                    self.paint(format!("   install {}", file.name), Style::new().green())
                }
                PlannedAction::Skip => self.paint(
                    format!("   skip    {} (already symlinked)", file.name),
                    Style::new().yellow(),
                ),
                PlannedAction::BackupAndInstall => self.paint(
                    format!("   backup  {} then install", file.name),
                    Style::new().yellow(),
                ),
            };
            self.print_line(line.to_string());
        }
        self.print_line("");
    }

    // =========================================
    // status
    // =========================================

    pub fn status(&self, report: &StatusReport) {
        self.print_line("");
        if !report.target_exists {
            self.print_line(
                self.paint(
                    format!("{}Claude commands directory does not exist yet", WARN),
                    Style::new().yellow(),
                )
                .to_string(),
            );
        }

        for command in &report.commands {
            let (label, style) = match &command.state {
                InstallState::Linked => ("linked".to_string(), Style::new().green()),
                InstallState::Copied => ("copied".to_string(), Style::new().green()),
                InstallState::Missing => ("missing".to_string(), Style::new().red()),
                InstallState::Modified => ("modified".to_string(), Style::new().yellow()),
                InstallState::LinkedElsewhere { points_to } => (
                    format!("linked elsewhere {}{}", LINK, points_to.display()),
                    Style::new().yellow(),
                ),
            };
            let backup = if command.has_backup {
                self.paint(" (backup present)", Style::new().dim()).to_string()
            } else {
                String::new()
            };
            self.print_line(format!(
                "   {:<24} {}{}",
                command.name,
                self.paint(label, style),
                backup
            ));
        }

        self.print_line("");
        self.info(format!(
            "   {}/{} command(s) installed",
            report.current(),
            report.commands.len()
        ));
        self.print_line("");
    }

    // =========================================
    // uninstall
    // =========================================

    pub fn removal(&self, report: &RemovalReport) {
        let line = match &report.outcome {
            RemovalOutcome::Removed { restored: Some(_) } => self.paint(
                format!("{}Removed {} (restored backup)", TRASH, report.name),
                Style::new().green(),
            ),
            RemovalOutcome::Removed { restored: None } => self.paint(
                format!("{}Removed {}", TRASH, report.name),
                Style::new().green(),
            ),
            RemovalOutcome::Kept { .. } => self.paint(
                format!("{}Kept {} (not installed by this plugin)", SKIP, report.name),
                Style::new().yellow(),
            ),
            RemovalOutcome::NotInstalled => self.paint(
                format!("   {} is not installed", report.name),
                Style::new().dim(),
            ),
        };
        self.print_line(line.to_string());
    }

    pub fn uninstall_summary(&self, removals: &[RemovalReport]) {
        let removed = removals.iter().filter(|r| r.is_removed()).count();
        self.print_line("");
        self.rule();
        self.print_line(
            self.paint(format!("{}Uninstall complete!", SPARKLE), Style::new().green())
                .to_string(),
        );
        self.info(format!("   Removed: {} command(s)", removed));
        self.print_line("");
    }

    pub fn cancelled(&self) {
        self.print_line("Uninstall cancelled.");
    }
}

impl InstallObserver for Reporter {
    fn commands_found(&mut self, files: &[CommandFile]) {
        self.print_line("");
        self.print_line(
            self.paint(
                format!("{}Found {} command(s) to install:", PACKAGE, files.len()),
                Style::new().green(),
            )
            .to_string(),
        );
        for file in files {
            self.info(format!("   - {} {}", file.name, self.paint(file.slash_name(), Style::new().dim())));
        }
    }

    fn target_created(&mut self, dir: &Path) {
        self.print_line("");
        self.print_line(
            self.paint(
                format!("{}Created Claude commands directory {}", SPARKLE, dir.display()),
                Style::new().yellow(),
            )
            .to_string(),
        );
    }

    fn file_installed(&mut self, report: &FileReport) {
        self.print_line("");
        if let Some(backup) = &report.backup {
            self.print_line(
                self.paint(
                    format!("{}Backed up existing {} to {}", BACKUP, report.name, backup.display()),
                    Style::new().yellow(),
                )
                .to_string(),
            );
        }
        let line = match report.outcome {
            InstallOutcome::Linked => {
                self.paint(format!("{}Installed {}", CHECK, report.name), Style::new().green())
            }
            InstallOutcome::Copied => {
                self.paint(format!("{}Copied {}", CHECK, report.name), Style::new().green())
            }
            InstallOutcome::Skipped => self.paint(
                format!("{}Skipping {} (already symlinked)", SKIP, report.name),
                Style::new().yellow(),
            ),
        };
        self.print_line(line.to_string());
    }
}
