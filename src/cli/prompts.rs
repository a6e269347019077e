use std::collections::VecDeque;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::cli::CommandError;

/// Source of answers for the interactive shell.
pub trait Prompter {
    /// Free-form text, pre-filled with `initial`. Empty answers are allowed.
    fn text(&mut self, prompt: &str, initial: &str) -> Result<String, CommandError>;
    /// Index of the chosen item.
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize, CommandError>;
    fn confirm(&mut self, prompt: &str) -> Result<bool, CommandError>;
}

/// Terminal prompts backed by dialoguer.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&mut self, prompt: &str, initial: &str) -> Result<String, CommandError> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()
            .map_err(CommandError::from)
    }

    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize, CommandError> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .map_err(CommandError::from)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, CommandError> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(CommandError::from)
    }
}

/// Answer queued in a [`ScriptedPrompter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedAnswer {
    Text(String),
    /// Picks the item with this exact label.
    Choose(String),
    Confirm(bool),
}

/// Replays queued answers in order. Drives the shell without a terminal.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<ScriptedAnswer>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = ScriptedAnswer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Every prompt shown so far.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &str) -> Result<ScriptedAnswer, CommandError> {
        self.asked.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| CommandError::Script(format!("no answer queued for `{prompt}`")))
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&mut self, prompt: &str, _initial: &str) -> Result<String, CommandError> {
        match self.next(prompt)? {
            ScriptedAnswer::Text(text) => Ok(text),
            other => Err(CommandError::Script(format!(
                "expected text for `{prompt}`, got {other:?}"
            ))),
        }
    }

    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize, CommandError> {
        match self.next(prompt)? {
            ScriptedAnswer::Choose(label) => items
                .iter()
                .position(|item| *item == label)
                .ok_or_else(|| {
                    CommandError::Script(format!("`{label}` is not offered by `{prompt}`"))
                }),
            other => Err(CommandError::Script(format!(
                "expected a choice for `{prompt}`, got {other:?}"
            ))),
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, CommandError> {
        match self.next(prompt)? {
            ScriptedAnswer::Confirm(answer) => Ok(answer),
            other => Err(CommandError::Script(format!(
                "expected yes/no for `{prompt}`, got {other:?}"
            ))),
        }
    }
}
