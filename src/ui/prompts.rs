//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;

use crate::error::{Result, SkillioError};

/// Convert dialoguer errors to SkillioError.
fn map_dialoguer_err(e: dialoguer::Error) -> SkillioError {
    SkillioError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Ask a yes/no question on the terminal.
pub fn confirm(question: &str, default: bool, term: &Term) -> Result<bool> {
    Confirm::with_theme(&prompt_theme())
        .with_prompt(question)
        .default(default)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}
