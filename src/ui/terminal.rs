//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{
    confirm, NonInteractiveUI, OutputMode, ProgressSpinner, SkillioTheme, SpinnerHandle,
    UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: SkillioTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, colors: bool) -> Self {
        Self {
            term: Term::stdout(),
            theme: SkillioTheme::for_colors(colors),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn output(&mut self, text: &str) {
        writeln!(self.term, "{}", text).ok();
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            let line = self.theme.format_warning(msg);
            writeln!(Term::stderr(), "{}", line).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        writeln!(Term::stderr(), "{}", line).ok();
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        confirm(question, default, &self.term)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message, self.theme.clone()))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Create the appropriate UI based on context.
///
/// CI environments always get the non-interactive UI.
pub fn create_ui(interactive: bool, mode: OutputMode, colors: bool) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() && !crate::shell::is_ci() {
        Box::new(TerminalUI::new(mode, colors))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
