use crate::{
    cli::{
        answers::{read_answers_arg, AnswerCollector, Answers},
        args::{AskArgs, Commands, OutputFormat},
    },
    config::{QuestionDefinition, QuestionSet},
    error::Result,
    ioutils::write_file,
    prompt::{get_prompt_provider, PromptProvider},
};
use std::path::Path;

/// Main CLI runner that dispatches a parsed command
pub struct Runner {
    command: Commands,
}

impl Runner {
    pub fn new(command: Commands) -> Self {
        Self { command }
    }

    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Check(args) => {
                let questions = load(&args.source)?;
                println!("{} is valid: {} questions.", args.source.display(), questions.len());
            }
            Commands::List(args) => {
                print!("{}", render_listing(&load(&args.source)?));
            }
            Commands::Dump(args) => {
                let questions = load(&args.source.source)?;
                print!("{}", dump(&questions, args.format)?);
            }
            Commands::Ask(args) => {
                let questions = load(&args.source.source)?;
                let answers = collect_answers(&questions, &args, get_prompt_provider())?;
                if !args.non_interactive {
                    for line in answers.summary() {
                        eprintln!("{line}");
                    }
                }
                write_answers(&answers, args.output.as_deref())?;
            }
        }
        Ok(())
    }
}

fn load(source: &Path) -> Result<QuestionSet> {
    QuestionSet::from_source(source)
}

/// Collects answers for `ask` with the given prompt provider.
pub fn collect_answers<P: PromptProvider>(
    questions: &QuestionSet,
    args: &AskArgs,
    provider: P,
) -> Result<Answers> {
    let prefilled = read_answers_arg(args.answers.clone())?;
    AnswerCollector::new(provider, args.non_interactive).collect(questions, prefilled)
}

fn write_answers(answers: &Answers, output: Option<&Path>) -> Result<()> {
    let json = answers.to_json_string()?;
    match output {
        Some(path) => {
            write_file(&format!("{json}\n"), path)?;
            log::info!("Answers written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Re-serializes the questions in the requested format.
pub fn dump(questions: &QuestionSet, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => questions.to_yaml_string(),
        OutputFormat::Json => questions.to_json_string().map(|json| format!("{json}\n")),
    }
}

/// One block per question: key, type, default, choices and help.
pub fn render_listing(questions: &QuestionSet) -> String {
    questions.iter().map(render_question).collect()
}

fn render_question(question: &QuestionDefinition) -> String {
    let mut out = format!("{} ({})", question.key(), question.value_type());
    if question.is_secret() {
        out.push_str(" [secret]");
    }
    if let Some(default) = question.display_default() {
        out.push_str(&format!(" [default: {default}]"));
    }
    out.push('\n');

    if let Some(choices) = question.choices() {
        let rendered: Vec<String> = choices
            .iter()
            .map(|choice| {
                if choices.is_labeled() {
                    format!("{} ({})", choice.label, choice.value)
                } else {
                    choice.value.to_string()
                }
            })
            .collect();
        out.push_str(&format!("  choices: {}\n", rendered.join(", ")));
    }
    for line in question.help().lines().filter(|line| !line.trim().is_empty()) {
        out.push_str(&format!("  {}\n", line.trim()));
    }
    out
}

/// Main entry point for CLI execution
pub fn run(command: Commands) -> Result<()> {
    Runner::new(command).run()
}
