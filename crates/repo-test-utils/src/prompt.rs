//! [`ScriptedPrompter`]: answers questions from a queue.
//!
//! Every question is recorded, including repeats after a validator
//! rejected an answer. When the script runs dry the prompter fails instead
//! of blocking, so a test that expects no questions can assert on
//! [`ScriptedPrompter::calls`].

use std::cell::RefCell;
use std::collections::VecDeque;

use repo_provision::{PromptError, Prompter, Validator};

/// One scripted reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Typed text. Empty text means "accept the default".
    Text(String),
    /// Index picked in a selection
    Choose(usize),
    /// The user aborts
    Cancel,
}

#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    questions: RefCell<Vec<String>>,
    rejections: RefCell<Vec<String>>,
    notes: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    /// A prompter with no answers; any question fails.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(self, text: &str) -> Self {
        self.push(Answer::Text(text.to_string()))
    }

    pub fn choose(self, index: usize) -> Self {
        self.push(Answer::Choose(index))
    }

    pub fn cancel(self) -> Self {
        self.push(Answer::Cancel)
    }

    fn push(self, answer: Answer) -> Self {
        self.answers.borrow_mut().push_back(answer);
        self
    }

    /// Every question asked, in order.
    pub fn questions(&self) -> Vec<String> {
        self.questions.borrow().clone()
    }

    /// Number of questions asked.
    pub fn calls(&self) -> usize {
        self.questions.borrow().len()
    }

    /// Validator messages for rejected answers.
    pub fn rejections(&self) -> Vec<String> {
        self.rejections.borrow().clone()
    }

    /// Messages shown through `notify`.
    pub fn notes(&self) -> Vec<String> {
        self.notes.borrow().clone()
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, message: &str) -> Result<Answer, PromptError> {
        self.questions.borrow_mut().push(message.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| PromptError::io(format!("no scripted answer for '{message}'")))
    }

    fn ask_text(
        &self,
        message: &str,
        default: Option<&str>,
        validate: Validator<'_>,
    ) -> Result<String, PromptError> {
        loop {
            match self.next(message)? {
                Answer::Text(text) => {
                    let value = if text.is_empty() {
                        default.unwrap_or_default().to_string()
                    } else {
                        text
                    };
                    match validate(&value) {
                        Ok(()) => return Ok(value),
                        Err(reason) => self.rejections.borrow_mut().push(reason),
                    }
                }
                Answer::Choose(index) => {
                    return Err(PromptError::io(format!(
                        "'{message}' expects text, script has choice {index}"
                    )));
                }
                Answer::Cancel => return Err(PromptError::Cancelled),
            }
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn input(
        &self,
        message: &str,
        default: Option<&str>,
        validate: Validator<'_>,
    ) -> Result<String, PromptError> {
        self.ask_text(message, default, validate)
    }

    fn password(&self, message: &str, validate: Validator<'_>) -> Result<String, PromptError> {
        self.ask_text(message, None, validate)
    }

    fn select(&self, message: &str, items: &[String], default: usize) -> Result<usize, PromptError> {
        match self.next(message)? {
            Answer::Choose(index) if index < items.len() => Ok(index),
            Answer::Choose(index) => Err(PromptError::io(format!(
                "'{message}' has {} items, script chose {index}",
                items.len()
            ))),
            Answer::Text(text) if text.is_empty() => Ok(default),
            Answer::Text(text) => items
                .iter()
                .position(|item| *item == text)
                .ok_or_else(|| PromptError::io(format!("'{text}' is not offered by '{message}'"))),
            Answer::Cancel => Err(PromptError::Cancelled),
        }
    }

    fn notify(&self, message: &str) {
        self.notes.borrow_mut().push(message.to_string());
    }
}
