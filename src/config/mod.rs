//! Question model for scaffolding templates
//!
//! This module contains the question model components:
//! - `types`: Value domains and typed values
//! - `choice`: Enumerated answer domains
//! - `question`: A single question definition and answer validation
//! - `loader`: Question file loading, discovery and the ordered question set

pub mod choice;
pub mod loader;
pub mod question;
pub mod types;

mod raw;

#[cfg(test)]
mod tests;

// Re-export commonly used types for convenience
pub use choice::{Choice, ChoiceSet};
pub use loader::{DocumentFormat, QuestionSet};
pub use question::{DefaultValue, QuestionDefinition};
pub use types::{Value, ValueType};
