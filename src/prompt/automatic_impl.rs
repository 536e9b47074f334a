//! Prompt provider that answers without user interaction
//!
//! Responses are looked up by prompt text and fall back to the defaults each
//! prompt offers. Useful for automation, testing, or CI/CD environments.

use super::interface::*;
use crate::error::Result;
use std::collections::HashMap;

/// Automatic prompt provider that gives predefined responses
#[derive(Debug, Default)]
pub struct AutomaticPrompter {
    text_responses: HashMap<String, String>,
    choice_responses: HashMap<String, usize>,
    confirmation_responses: HashMap<String, bool>,
}

impl AutomaticPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predefined text response for a specific prompt
    pub fn with_text_response(mut self, prompt: &str, response: &str) -> Self {
        self.text_responses.insert(prompt.to_string(), response.to_string());
        self
    }

    /// Add a predefined choice response for a specific prompt
    pub fn with_choice_response(mut self, prompt: &str, choice_index: usize) -> Self {
        self.choice_responses.insert(prompt.to_string(), choice_index);
        self
    }

    /// Add a predefined confirmation response for a specific prompt
    pub fn with_confirmation_response(mut self, prompt: &str, response: bool) -> Self {
        self.confirmation_responses.insert(prompt.to_string(), response);
        self
    }
}

impl TextPrompter for AutomaticPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        let response = self
            .text_responses
            .get(&config.prompt)
            .cloned()
            .or_else(|| config.default.clone())
            .unwrap_or_default();

        if config.secret {
            log::info!("Auto-answering secret prompt '{}'", config.prompt);
        } else {
            log::info!("Auto-answering text prompt '{}' with: '{}'", config.prompt, response);
        }
        Ok(response)
    }
}

impl SingleChoicePrompter for AutomaticPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        let response = self
            .choice_responses
            .get(&config.prompt)
            .copied()
            .or(config.default_index)
            .unwrap_or(0);

        log::info!(
            "Auto-answering choice prompt '{}' with option {}: '{}'",
            config.prompt,
            response,
            config.choices.get(response).map(String::as_str).unwrap_or("<invalid>")
        );
        Ok(response)
    }
}

impl ConfirmationPrompter for AutomaticPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        let response = self
            .confirmation_responses
            .get(&config.prompt)
            .copied()
            .unwrap_or(config.default);

        log::info!("Auto-answering confirmation '{}' with: {}", config.prompt, response);
        Ok(response)
    }
}
