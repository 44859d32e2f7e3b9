//! Terminal prompts backed by dialoguer

use std::io;

use colored::Colorize;
use dialoguer::{Input, Password, Select};
use repo_provision::{PromptError, Prompter, Validator};

/// Asks questions on the terminal.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

/// Ctrl-C surfaces as an interrupted read; anything else is a real failure.
fn prompt_error(err: dialoguer::Error) -> PromptError {
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => {
            PromptError::Cancelled
        }
        other => PromptError::io(other.to_string()),
    }
}

impl Prompter for DialoguerPrompter {
    fn input(
        &self,
        message: &str,
        default: Option<&str>,
        validate: Validator<'_>,
    ) -> Result<String, PromptError> {
        let mut input = Input::<String>::new()
            .with_prompt(message)
            .allow_empty(true)
            .validate_with(|value: &String| validate(value));
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(prompt_error)
    }

    fn password(&self, message: &str, validate: Validator<'_>) -> Result<String, PromptError> {
        Password::new()
            .with_prompt(message)
            .allow_empty_password(true)
            .validate_with(|value: &String| validate(value))
            .interact()
            .map_err(prompt_error)
    }

    fn select(&self, message: &str, items: &[String], default: usize) -> Result<usize, PromptError> {
        Select::new()
            .with_prompt(message)
            .items(items)
            .default(default)
            .interact_opt()
            .map_err(prompt_error)?
            .ok_or(PromptError::Cancelled)
    }

    fn notify(&self, message: &str) {
        eprintln!("{}", message.yellow());
    }
}
