//! Categories command implementation.

use crate::error::Result;
use crate::search::SearchEngine;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult};

const SHOWN_EXAMPLES: usize = 3;

/// The categories command implementation.
pub struct CategoriesCommand<'a> {
    ctx: &'a CommandContext,
}

impl<'a> CategoriesCommand<'a> {
    /// Create a new categories command.
    pub fn new(ctx: &'a CommandContext) -> Self {
        Self { ctx }
    }
}

impl Command for CategoriesCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let categories = SearchEngine::new(&self.ctx.catalog).categories();

        if categories.is_empty() {
            ui.warning("No categories found in the catalog");
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(vec!["Category", "Count", "Examples"]);
        for category in &categories {
            table.add_row(vec![
                category.name.clone(),
                category.count.to_string(),
                category
                    .examples
                    .iter()
                    .take(SHOWN_EXAMPLES)
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", "),
            ]);
        }

        ui.show_header("Skill categories");
        ui.output(&table.render());
        ui.message("");
        ui.message("Browse one with: skillio list --category <name>");

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::cli::commands::dispatcher::test_support::test_context;
    use crate::ui::MockUI;

    #[test]
    fn lists_tags_with_counts() {
        let tc = test_context();
        let mut ui = MockUI::new();

        let result = CategoriesCommand::new(&tc.ctx).execute(&mut ui).unwrap();

        assert!(result.success);
        let output = ui.output_text();
        assert!(output.contains("media"));
        assert!(output.contains("dev"));
        assert!(output.contains("video-downloader"));
    }

    #[test]
    fn empty_catalog_warns() {
        let mut tc = test_context();
        tc.ctx.catalog = Catalog::default();
        let mut ui = MockUI::new();

        let result = CategoriesCommand::new(&tc.ctx).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_warning("No categories"));
    }
}
