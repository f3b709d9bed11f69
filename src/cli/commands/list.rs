//! List command implementation.
//!
//! The `skillio list` command lists installed skills, or catalog skills
//! with `--all` / `--category`.

use crate::catalog::CatalogEntry;
use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::install::InstalledSkill;
use crate::search::SearchEngine;
use crate::ui::{truncate, Table, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult};

const DESCRIPTION_WIDTH: usize = 60;

/// The list command implementation.
pub struct ListCommand<'a> {
    ctx: &'a CommandContext,
    args: ListArgs,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(ctx: &'a CommandContext, args: ListArgs) -> Self {
        Self { ctx, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }

    fn shows_catalog(&self) -> bool {
        self.args.all || self.args.category.is_some()
    }

    fn list_catalog(&self, ui: &mut dyn UserInterface) {
        let engine = SearchEngine::new(&self.ctx.catalog);
        let entries = engine.list(self.args.category.as_deref());

        if entries.is_empty() {
            match &self.args.category {
                Some(category) => ui.warning(&format!("No skills in category '{}'", category)),
                None => ui.warning("The skill catalog is empty"),
            }
            return;
        }

        let title = match &self.args.category {
            Some(category) => format!("Skills in '{}'", category),
            None => "Available skills".to_string(),
        };
        ui.show_header(&title);
        ui.output(&catalog_table(&entries));
        ui.message("");
        ui.message(&format!("Total: {} skills", entries.len()));
    }

    fn list_installed(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let installed = self.ctx.installer().list_installed()?;

        if installed.is_empty() {
            ui.message("No skills installed yet.");
            ui.message("Run 'skillio search <query>' to find one.");
            return Ok(());
        }

        let details = ui.output_mode().shows_details();
        ui.show_header("Installed skills");
        ui.output(&installed_table(&installed, details));
        ui.message("");
        ui.message(&format!("Total: {} skills", installed.len()));
        Ok(())
    }
}

fn catalog_table(entries: &[&CatalogEntry]) -> String {
    let mut table = Table::new(vec!["Skill", "Version", "Description"]);
    for entry in entries {
        table.add_row(vec![
            entry.name.clone(),
            entry.version.clone(),
            truncate(&entry.description, DESCRIPTION_WIDTH),
        ]);
    }
    table.render()
}

/// Verbose output swaps the description for the install path.
fn installed_table(installed: &[InstalledSkill], show_path: bool) -> String {
    let last = if show_path { "Path" } else { "Description" };
    let mut table = Table::new(vec!["Skill", "Version", "Method", last]);
    for skill in installed {
        let detail = if show_path {
            skill.installed_path.display().to_string()
        } else {
            truncate(&skill.description, DESCRIPTION_WIDTH)
        };
        table.add_row(vec![
            skill.name.clone(),
            skill.version.clone(),
            skill.method.to_string(),
            detail,
        ]);
    }
    table.render()
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.shows_catalog() {
            self.list_catalog(ui);
        } else {
            self.list_installed(ui)?;
        }
        Ok(CommandResult::success())
    }
}
