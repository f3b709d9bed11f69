//! Environments command implementation.
//!
//! The `skillio environments` command shows where skills can be installed,
//! recommended location first.

use crate::error::Result;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The environments command implementation.
pub struct EnvironmentsCommand<'a> {
    ctx: &'a CommandContext,
}

impl<'a> EnvironmentsCommand<'a> {
    /// Create a new environments command.
    pub fn new(ctx: &'a CommandContext) -> Self {
        Self { ctx }
    }
}

impl Command for EnvironmentsCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let environments = self.ctx.detector.detect();

        let mut table = Table::new(vec!["#", "Type", "Scope", "Path", "Status"]);
        for (index, env) in environments.iter().enumerate() {
            let status = if env.exists {
                "✓ exists"
            } else {
                "○ will create"
            };
            table.add_row(vec![
                (index + 1).to_string(),
                env.kind.to_string(),
                env.scope.to_string(),
                env.path.display().to_string(),
                status.to_string(),
            ]);
        }

        ui.show_header("AI environments");
        ui.output(&table.render());

        // detect() always ends with the standalone directory
        if let Some(recommended) = environments.first() {
            ui.message("");
            ui.message(&format!(
                "Recommended: {} ({})",
                recommended.path.display(),
                recommended.kind
            ));
        }
        ui.message("Install into a scope with: skillio install <name> --scope project|global");

        Ok(CommandResult::success())
    }
}
