pub mod answers;
pub mod args;
pub mod runner;

pub use answers::{AnswerCollector, Answers};
pub use args::{get_log_level_from_verbose, parse_cli, Cli, Commands, OutputFormat};
pub use runner::run;
