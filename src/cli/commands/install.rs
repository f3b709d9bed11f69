//! Install command implementation.
//!
//! The `skillio install` command materializes a catalog skill on disk,
//! through skill-seekers when possible and a generated SKILL.md otherwise.

use crate::catalog::SkillSource;
use crate::cli::args::InstallArgs;
use crate::error::{ErrorKind, Result, SkillioError};
use crate::install::{InstallOptions, InstallOutcome, InstallReport};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

const SHOWN_FILES: usize = 10;
const SHOWN_SCENARIOS: usize = 2;

/// The install command implementation.
pub struct InstallCommand<'a> {
    ctx: &'a CommandContext,
    args: InstallArgs,
}

impl<'a> InstallCommand<'a> {
    /// Create a new install command.
    pub fn new(ctx: &'a CommandContext, args: InstallArgs) -> Self {
        Self { ctx, args }
    }

    /// Installer options for the parsed flags.
    pub fn options(&self) -> InstallOptions {
        InstallOptions {
            target: self.args.target.clone(),
            scope: self.args.scope,
            force: self.args.force,
            use_external: !self.args.no_seekers,
            enhance: !self.args.no_enhance,
        }
    }

    fn report_success(&self, ui: &mut dyn UserInterface, report: &InstallReport) {
        ui.success(&format!("Installed {}", report.name));
        ui.message(&format!("  Location: {}", report.path.display()));
        ui.message(&format!("  Method:   {}", report.method));

        if let Some(reason) = &report.fallback_reason {
            ui.warning(&fallback_warning(
                &self.ctx.settings.generator.program,
                reason,
            ));
        }

        if ui.output_mode().shows_details() && !report.contents.is_empty() {
            ui.message("  Files:");
            for file in report.contents.iter().take(SHOWN_FILES) {
                ui.message(&format!("    {}", file));
            }
        }

        if let Some(entry) = self.ctx.catalog.get(&report.name) {
            if !entry.scenarios.is_empty() {
                ui.message("");
                ui.message("Try it:");
                for scenario in entry.scenarios.iter().take(SHOWN_SCENARIOS) {
                    ui.message(&format!("  \"{}\"", scenario));
                }
            }
        }
    }

    fn report_failure(&self, ui: &mut dyn UserInterface, error: &SkillioError) -> CommandResult {
        ui.error(&error.to_string());
        if matches!(
            error.kind(),
            ErrorKind::ExternalToolUnavailable
                | ErrorKind::ExternalToolFailed
                | ErrorKind::ExternalToolTimeout
        ) {
            ui.message("Tip: use --no-seekers to install a simple SKILL.md instead.");
        }
        CommandResult::from_error_kind(error.kind())
    }
}

fn fallback_warning(program: &str, reason: &str) -> String {
    format!(
        "{} could not generate the skill, installed a simple SKILL.md instead ({})",
        program, reason
    )
}

impl Command for InstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let installer = self.ctx.installer();
        let options = self.options();

        if self.args.json {
            let outcome = InstallOutcome::from(installer.install(&self.args.name, &options));
            let output = serde_json::to_string_pretty(&outcome)
                .map_err(|e| SkillioError::Other(e.into()))?;
            ui.output(&output);
            return Ok(match outcome.error_kind {
                Some(kind) => CommandResult::from_error_kind(kind),
                None => CommandResult::success(),
            });
        }

        if let Some(entry) = self.ctx.catalog.get(&self.args.name) {
            if let SkillSource::Github { repo } = &entry.source {
                ui.message(&format!("Source: https://github.com/{}", repo));
            }
        }

        let mut spinner = ui.start_spinner("Generating skill...");
        let result = installer.install(&self.args.name, &options);

        match result {
            Ok(report) => {
                spinner.finish_success(&format!("Generated {}", report.name));
                self.report_success(ui, &report);
                Ok(CommandResult::success())
            }
            Err(e) => {
                spinner.finish_error("Installation failed");
                Ok(self.report_failure(ui, &e))
            }
        }
    }
}
