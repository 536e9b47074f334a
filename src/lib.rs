/// Handles argument parsing and command dispatch.
pub mod cli;

/// Question file model and loader.
pub mod config;

pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for standard library types.
pub mod ext;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// User input and interaction handling.
pub mod prompt;
