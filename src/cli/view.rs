use colored::Colorize;

use crate::cli::output;
use crate::form::{CancelPrompt, FormView};

/// Renders the meal form as terminal text.
#[derive(Debug, Default)]
pub struct TerminalFormView {
    save_enabled: bool,
    pending_prompt: Option<CancelPrompt>,
}

impl TerminalFormView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_enabled(&self) -> bool {
        self.save_enabled
    }

    /// Hands over the cancel prompt the form asked for, if any.
    pub fn take_prompt(&mut self) -> Option<CancelPrompt> {
        self.pending_prompt.take()
    }
}

impl FormView for TerminalFormView {
    fn show_fields(&mut self, name: &str, creation_time: &str) {
        println!("  {:<14} {}", "Name:".dimmed(), name);
        println!("  {:<14} {}", "Created:".dimmed(), creation_time);
    }

    fn set_title(&mut self, title: &str) {
        output::info(format!("Title: {}", title.bold()));
    }

    fn set_save_enabled(&mut self, enabled: bool) {
        self.save_enabled = enabled;
    }

    fn present_cancel_prompt(&mut self, prompt: &CancelPrompt) {
        self.pending_prompt = Some(prompt.clone());
    }
}
