//! Non-interactive UI for CI/headless environments.

use crate::error::Result;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Output is plain text without colors or spinners. Confirmations are never
/// shown and resolve to "no", so destructive commands need `--force`.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn output(&mut self, text: &str) {
        println!("{}", text);
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn confirm(&mut self, question: &str, _default: bool) -> Result<bool> {
        tracing::debug!("Declining '{}' in non-interactive mode", question);
        Ok(false)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("{}", message);
        }
        Box::new(NoopSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that only prints its final status line.
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_declines() {
        let mut ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.confirm("Remove skill?", true).unwrap());
    }

    #[test]
    fn never_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Verbose);
        assert!(!ui.is_interactive());
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }

    #[test]
    fn spinner_lifecycle() {
        let mut ui = NonInteractiveUI::new(OutputMode::Quiet);
        let mut spinner = ui.start_spinner("Working");
        spinner.set_message("Still working");
        spinner.finish_success("Done");
    }
}
