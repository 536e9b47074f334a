use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML document. Original error: {0}")]
    YAMLParseError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON document. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    /// The question document is well-formed but violates the question model.
    #[error("Schema error in question '{key}': {violation}.")]
    SchemaError { key: String, violation: SchemaViolation },

    #[error("No question file found in '{template_dir}'. Tried: {question_files}.")]
    QuestionFileNotFound { template_dir: String, question_files: String },

    #[error("Unsupported question file '{path}': expected a .yml, .yaml or .json extension.")]
    UnsupportedFormat { path: String },

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),

    #[error("Prompt failed. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// The specific rule a question definition broke.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaViolation {
    #[error("key is declared more than once")]
    DuplicateKey,

    #[error("unsupported type '{0}', expected one of str, float, bool")]
    UnsupportedType(String),

    #[error("default {found} does not match declared type {expected}")]
    DefaultTypeMismatch { expected: String, found: String },

    #[error("default '{0}' is not one of the declared choices")]
    DefaultNotInChoices(String),

    #[error("choices are declared but empty")]
    EmptyChoices,

    #[error("choice '{label}' holds {found}, expected {expected}")]
    ChoiceTypeMismatch { label: String, expected: String, found: String },

    #[error("choice label '{0}' is declared more than once")]
    DuplicateChoiceLabel(String),

    #[error("shorthand value must be a string, number, boolean or null, found {0}")]
    UnsupportedShorthand(String),

    #[error("field '{field}' must be {expected}, found {found}")]
    InvalidField { field: String, expected: String, found: String },

    #[error("field '{0}' is declared more than once")]
    DuplicateField(String),
}

impl Error {
    pub fn schema(key: impl Into<String>, violation: SchemaViolation) -> Self {
        Error::SchemaError { key: key.into(), violation }
    }
}

/// Convenience type alias for Results with the crate error as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_error_names_key_and_violation() {
        let err = Error::schema("db_user", SchemaViolation::DuplicateKey);
        assert_eq!(
            err.to_string(),
            "Schema error in question 'db_user': key is declared more than once."
        );
    }

    #[test]
    fn default_mismatch_message() {
        let err = Error::schema(
            "odoo_version",
            SchemaViolation::DefaultTypeMismatch {
                expected: "float".into(),
                found: "a string".into(),
            },
        );
        assert!(err.to_string().contains("does not match declared type float"));
    }
}
