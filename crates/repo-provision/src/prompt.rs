//! Interactive question capability
//!
//! The resolver never talks to a terminal directly. Front ends implement
//! [`Prompter`]; tests script it.

/// Checks an answer before it is accepted.
///
/// `Err` carries the message shown to the user, who is asked again.
pub type Validator<'a> = &'a dyn Fn(&str) -> Result<(), String>;

/// Why a prompt produced no answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromptError {
    /// The user aborted the question
    #[error("prompt cancelled")]
    Cancelled,

    /// The prompt could not be shown or read
    #[error("prompt failed: {message}")]
    Io { message: String },
}

impl PromptError {
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}

/// Asks the user questions.
///
/// Implementations must run `validate` on every answer and keep asking until
/// it passes or the user cancels.
pub trait Prompter {
    /// Free-text question. An empty answer falls back to `default`.
    fn input(
        &self,
        message: &str,
        default: Option<&str>,
        validate: Validator<'_>,
    ) -> Result<String, PromptError>;

    /// Secret question; the answer is not echoed.
    fn password(&self, message: &str, validate: Validator<'_>) -> Result<String, PromptError>;

    /// Pick one of `items`, returning its index.
    fn select(&self, message: &str, items: &[String], default: usize) -> Result<usize, PromptError>;

    /// Show a message that needs no answer.
    fn notify(&self, message: &str);
}

/// Validator that accepts any non-blank answer.
pub fn required(message: &'static str) -> impl Fn(&str) -> Result<(), String> {
    move |value: &str| {
        if value.trim().is_empty() {
            Err(message.to_string())
        } else {
            Ok(())
        }
    }
}

/// Validator that accepts everything.
pub fn any(_value: &str) -> Result<(), String> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank_answers() {
        let validate = required("Name is required");
        assert_eq!(validate("   "), Err("Name is required".to_string()));
        assert_eq!(validate(""), Err("Name is required".to_string()));
        assert_eq!(validate("alice"), Ok(()));
    }
}
