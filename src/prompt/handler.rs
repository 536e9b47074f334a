//! Turns question definitions into prompts
//!
//! The handler picks the prompt kind from the question, hands a UI-independent
//! configuration to the provider and converts the reply back into a typed value.

use super::interface::{
    ConfirmationConfig, PromptProvider, SingleChoiceConfig, TextPromptConfig,
};
use crate::{
    config::{ChoiceSet, DefaultValue, QuestionDefinition, Value, ValueType},
    error::{Error, Result},
};

/// Creates and executes prompts for questions
pub struct PromptHandler<P: PromptProvider> {
    provider: P,
}

impl<P: PromptProvider> PromptHandler<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Asks a single question.
    ///
    /// Input that does not fit the question yields `Error::ValidationError`,
    /// so callers can report it and ask again.
    pub fn ask(&self, question: &QuestionDefinition) -> Result<Value> {
        match (question.choices(), question.value_type()) {
            (Some(choices), _) => self.prompt_single_choice(question, choices),
            (None, ValueType::Boolean) => self.prompt_confirmation(question),
            (None, _) if question.is_secret() => self.prompt_secret(question),
            (None, _) => self.prompt_text(question),
        }
    }

    fn prompt_single_choice(
        &self,
        question: &QuestionDefinition,
        choices: &ChoiceSet,
    ) -> Result<Value> {
        let config = SingleChoiceConfig {
            prompt: question.prompt_text().to_string(),
            choices: choices.labels(),
            default_index: question.suggested_default().and_then(|d| choices.position(d)),
        };
        let index = self.provider.prompt_single_choice(&config)?;
        choices.get(index).map(|choice| choice.value.clone()).ok_or_else(|| {
            Error::ValidationError(format!(
                "selection {index} is out of range for '{}'",
                question.key()
            ))
        })
    }

    fn prompt_confirmation(&self, question: &QuestionDefinition) -> Result<Value> {
        let config = ConfirmationConfig {
            prompt: question.prompt_text().to_string(),
            default: question.suggested_default().and_then(Value::as_bool).unwrap_or(false),
        };
        self.provider.prompt_confirmation(&config).map(Value::Boolean)
    }

    fn prompt_secret(&self, question: &QuestionDefinition) -> Result<Value> {
        let config = TextPromptConfig {
            prompt: question.prompt_text().to_string(),
            default: None,
            secret: true,
        };
        let response = self.provider.prompt_text(&config)?;
        match question.default() {
            Some(DefaultValue::Placeholder(hash)) if response.is_empty() => {
                Ok(Value::String(hash.clone()))
            }
            _ => question.validate_answer(&serde_json::Value::String(response)),
        }
    }

    fn prompt_text(&self, question: &QuestionDefinition) -> Result<Value> {
        let config = TextPromptConfig {
            prompt: question.prompt_text().to_string(),
            default: question.suggested_default().map(Value::to_string),
            secret: false,
        };
        let response = self.provider.prompt_text(&config)?;
        question.validate_answer(&serde_json::Value::String(response))
    }
}
