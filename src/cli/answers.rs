use crate::{
    config::{DefaultValue, QuestionDefinition, QuestionSet, Value},
    constants::{validation, MAX_PROMPT_ATTEMPTS, SECRET_MASK, STDIN_INDICATOR},
    error::{Error, Result},
    ioutils::read_from,
    prompt::{PromptHandler, PromptProvider},
};
use indexmap::IndexMap;
use serde_json::Map;
use std::collections::HashSet;

/// Validated answers, in question order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    values: IndexMap<String, Value>,
    secret_keys: HashSet<String>,
}

impl Answers {
    fn insert(&mut self, question: &QuestionDefinition, value: Value) {
        if question.is_secret() {
            self.secret_keys.insert(question.key().to_string());
        }
        self.values.insert(question.key().to_string(), value);
    }

    /// Answer for `key`.
    ///
    /// A secret question answered from its default holds the stored
    /// placeholder as a string, whatever the declared type.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn is_secret(&self, key: &str) -> bool {
        self.secret_keys.contains(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Answers that may be recorded; secret ones are left out.
    pub fn public_values(&self) -> IndexMap<&str, &Value> {
        self.iter().filter(|(key, _)| !self.is_secret(key)).collect()
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.public_values())?)
    }

    /// One `key: value` line per answer with secret values masked.
    pub fn summary(&self) -> Vec<String> {
        self.iter()
            .map(|(key, value)| {
                if self.is_secret(key) {
                    format!("{key}: {SECRET_MASK}")
                } else {
                    format!("{key}: {value}")
                }
            })
            .collect()
    }
}

/// Collects answers from pre-filled values and user prompts
pub struct AnswerCollector<P: PromptProvider> {
    handler: PromptHandler<P>,
    non_interactive: bool,
}

impl<P: PromptProvider> AnswerCollector<P> {
    pub fn new(provider: P, non_interactive: bool) -> Self {
        Self { handler: PromptHandler::new(provider), non_interactive }
    }

    /// Collects one answer per question, in question order.
    ///
    /// Pre-filled answers win over prompting and must be valid. Without a
    /// pre-filled answer the question is asked, or in non-interactive mode
    /// its default is taken.
    pub fn collect(
        &self,
        questions: &QuestionSet,
        prefilled: Map<String, serde_json::Value>,
    ) -> Result<Answers> {
        for key in prefilled.keys() {
            if !questions.contains_key(key) {
                log::warn!("Ignoring answer for unknown question '{key}'");
            }
        }

        let mut answers = Answers::default();
        for question in questions {
            let value = match prefilled.get(question.key()) {
                Some(raw) => question.validate_answer(raw)?,
                None if self.non_interactive => self.default_answer(question)?,
                None => self.ask_until_valid(question)?,
            };
            log::debug!("Collected answer for '{}'", question.key());
            answers.insert(question, value);
        }

        Ok(answers)
    }

    fn default_answer(&self, question: &QuestionDefinition) -> Result<Value> {
        match question.default() {
            Some(DefaultValue::Literal(value)) => Ok(value.clone()),
            // Handed on untouched, hashing is up to the consumer
            Some(DefaultValue::Placeholder(hash)) => Ok(Value::String(hash.clone())),
            None => Err(Error::ValidationError(format!(
                "'{}': {}",
                question.key(),
                validation::MISSING_ANSWER
            ))),
        }
    }

    /// Re-asks after invalid input, giving up after `MAX_PROMPT_ATTEMPTS`.
    fn ask_until_valid(&self, question: &QuestionDefinition) -> Result<Value> {
        let mut attempt = 1;
        loop {
            match self.handler.ask(question) {
                Ok(value) => return Ok(value),
                Err(Error::ValidationError(msg)) if attempt < MAX_PROMPT_ATTEMPTS => {
                    log::debug!("Attempt {attempt} for '{}' was invalid", question.key());
                    eprintln!("{msg}");
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

/// Reads pre-filled answers from a JSON string, or from stdin for `-`.
pub fn read_answers_arg(answers_arg: Option<String>) -> Result<Map<String, serde_json::Value>> {
    match answers_arg {
        None => Ok(Map::new()),
        Some(arg) if arg == STDIN_INDICATOR => parse_answers(&read_from(std::io::stdin())?),
        Some(arg) => parse_answers(&arg),
    }
}

/// Parse a string into a JSON object of answers.
pub fn parse_answers(buf: &str) -> Result<Map<String, serde_json::Value>> {
    let value = match serde_json::from_str::<serde_json::Value>(buf) {
        Ok(value) => value,
        // Over-escaped quotes (\") show up when answers pass through a shell twice
        Err(initial_err) if buf.contains("\\\"") => {
            serde_json::from_str(&buf.replace("\\\"", "\""))
                .map_err(|_| Error::JSONParseError(initial_err))?
        }
        Err(err) => return Err(err.into()),
    };

    match value {
        serde_json::Value::Object(map) => Ok(map),
        // The content is not echoed, it may hold secrets
        _ => Err(Error::ValidationError("answers must be a JSON object".to_string())),
    }
}
