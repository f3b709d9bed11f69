//! Search command implementation.
//!
//! The `skillio search` command ranks catalog skills against a
//! natural-language query.

use crate::cli::args::SearchArgs;
use crate::error::{Result, SkillioError};
use crate::search::{MatchMode, MatchResult, SearchEngine, SearchOptions};
use crate::ui::{truncate, Table, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult};

const DESCRIPTION_WIDTH: usize = 50;

/// The search command implementation.
pub struct SearchCommand<'a> {
    ctx: &'a CommandContext,
    args: SearchArgs,
}

impl<'a> SearchCommand<'a> {
    /// Create a new search command.
    pub fn new(ctx: &'a CommandContext, args: SearchArgs) -> Self {
        Self { ctx, args }
    }

    fn options(&self) -> SearchOptions {
        SearchOptions {
            mode: if self.args.keyword {
                MatchMode::Keyword
            } else {
                MatchMode::Intent
            },
            ..SearchOptions::with_limit(self.args.limit)
        }
    }

    fn render_table(results: &[MatchResult]) -> String {
        let mut table = Table::new(vec!["Skill", "Description", "Score", "Source"]);
        for result in results {
            table.add_row(vec![
                result.entry.name.clone(),
                truncate(&result.entry.description, DESCRIPTION_WIDTH),
                format!("{:.1}", result.match_score),
                result.entry.source.repo().unwrap_or("N/A").to_string(),
            ]);
        }
        table.render()
    }
}

impl Command for SearchCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let engine = SearchEngine::new(&self.ctx.catalog);
        let results = engine.search(&self.args.query, &self.options());

        if self.args.json {
            let output = serde_json::to_string_pretty(&results)
                .map_err(|e| SkillioError::Other(e.into()))?;
            ui.output(&output);
            return Ok(CommandResult::success());
        }

        let Some(top) = results.first() else {
            ui.warning(&format!("No skills found for '{}'", self.args.query));
            ui.message("Try different keywords, or run 'skillio categories' to browse.");
            return Ok(CommandResult::success());
        };

        ui.show_header(&format!("Skills for \"{}\"", self.args.query));
        ui.output(&Self::render_table(&results));
        ui.message("");
        ui.message(&format!("Recommended: skillio install {}", top.entry.name));

        Ok(CommandResult::success())
    }
}
