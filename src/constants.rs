//! Constants used throughout the crate

/// Question file names in order of preference
pub const QUESTION_FILENAMES: &[&str] = &[
    "copier.yml",
    "copier.yaml",
    "questions.yml",
    "questions.yaml",
    "questions.json",
];

/// Top-level keys with this prefix hold template settings, not questions
pub const SETTINGS_PREFIX: char = '_';

/// Shown in place of secret values
pub const SECRET_MASK: &str = "********";

/// Times a question is asked before invalid input becomes an error
pub const MAX_PROMPT_ATTEMPTS: usize = 3;

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Answer validation messages
pub mod validation {
    pub const NOT_A_CHOICE: &str = "is not one of the allowed choices";
    pub const MISSING_ANSWER: &str = "no answer was provided and the question has no default";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
