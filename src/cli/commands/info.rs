//! Info command implementation.
//!
//! The `skillio info` command shows the full catalog record for one skill.

use crate::catalog::{CatalogEntry, SkillSource};
use crate::cli::args::InfoArgs;
use crate::error::Result;
use crate::search::SearchEngine;
use crate::ui::{SkillioTheme, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult, EXIT_NOT_FOUND};

const SHOWN_SCENARIOS: usize = 5;

/// The info command implementation.
pub struct InfoCommand<'a> {
    ctx: &'a CommandContext,
    args: InfoArgs,
}

impl<'a> InfoCommand<'a> {
    /// Create a new info command.
    pub fn new(ctx: &'a CommandContext, args: InfoArgs) -> Self {
        Self { ctx, args }
    }

    fn render(&self, entry: &CatalogEntry, installed_at: Option<String>) -> Vec<String> {
        let theme = SkillioTheme::plain();
        let mut lines = vec![
            theme.format_field("Version", &entry.version),
            theme.format_field("Description", &entry.description),
        ];
        if let Some(localized) = &entry.description_localized {
            lines.push(format!("  {}", localized));
        }

        if !entry.capabilities.is_empty() {
            lines.push(String::new());
            lines.push("Capabilities:".to_string());
            lines.extend(entry.capabilities.iter().map(|c| format!("  - {}", c)));
        }

        if !entry.scenarios.is_empty() {
            lines.push(String::new());
            lines.push("Usage scenarios:".to_string());
            lines.extend(
                entry
                    .scenarios
                    .iter()
                    .take(SHOWN_SCENARIOS)
                    .map(|s| format!("  - \"{}\"", s)),
            );
        }

        lines.push(String::new());
        let source = match &entry.source {
            SkillSource::Github { repo } => format!("https://github.com/{}", repo),
            other => other.kind().to_string(),
        };
        lines.push(theme.format_field("Source", &source));

        let dependencies = if entry.dependencies.is_empty() {
            "None".to_string()
        } else {
            entry.dependencies.join(", ")
        };
        lines.push(theme.format_field("Dependencies", &dependencies));
        lines.push(theme.format_field(
            "Quality",
            &format!("{:.1}/10", entry.quality_score),
        ));
        if let Some(license) = &entry.license {
            lines.push(theme.format_field("License", license));
        }
        if let Some(path) = installed_at {
            lines.push(theme.format_field("Installed", &path));
        }
        lines
    }
}

impl Command for InfoCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let engine = SearchEngine::new(&self.ctx.catalog);
        let Some(entry) = engine.info(&self.args.name) else {
            ui.error(&format!("Skill '{}' not found in index", self.args.name));
            ui.message("Run 'skillio search <query>' to find skills.");
            return Ok(CommandResult::failure(EXIT_NOT_FOUND));
        };

        let installed_at = self
            .ctx
            .registry_store()
            .load()?
            .get(&entry.name)
            .map(|record| record.path.display().to_string());

        ui.show_header(&entry.name);
        for line in self.render(entry, installed_at) {
            ui.output(&line);
        }

        Ok(CommandResult::success())
    }
}
