//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Confirmation answers can be queued.
//!
//! # Example
//!
//! ```
//! use skillio::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_confirm(true);
//!
//! assert!(ui.confirm("Remove 'git-helper'?", false).unwrap());
//! ui.success("Removed git-helper");
//!
//! assert!(ui.has_success("git-helper"));
//! assert_eq!(ui.confirmations(), &["Remove 'git-helper'?".to_string()]);
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::error::Result;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    outputs: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<String>,
    spinner_results: Rc<RefCell<Vec<(bool, String)>>>,
    confirm_answers: VecDeque<bool>,
    confirmations: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Queue an answer for the next confirmation.
    ///
    /// Without a queued answer, confirmations return their default.
    pub fn queue_confirm(&mut self, answer: bool) {
        self.confirm_answers.push_back(answer);
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured command output.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// All captured command output joined with newlines.
    pub fn output_text(&self) -> String {
        self.outputs.join("\n")
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Spinner results as `(succeeded, message)`.
    pub fn spinner_results(&self) -> Vec<(bool, String)> {
        self.spinner_results.borrow().clone()
    }

    /// Questions asked through `confirm`.
    pub fn confirmations(&self) -> &[String] {
        &self.confirmations
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn output(&mut self, text: &str) {
        self.outputs.push(text.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        self.confirmations.push(question.to_string());
        Ok(self.confirm_answers.pop_front().unwrap_or(default))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            results: Rc::clone(&self.spinner_results),
        })
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Spinner that records how it finished.
#[derive(Debug)]
pub struct MockSpinner {
    results: Rc<RefCell<Vec<(bool, String)>>>,
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        self.results.borrow_mut().push((true, msg.to_string()));
    }

    fn finish_error(&mut self, msg: &str) {
        self.results.borrow_mut().push((false, msg.to_string()));
    }
}
