//! Command dispatch for the `kwscript` entrypoint.

use std::io::{self, Write};
use std::path::PathBuf;

use action_words::{ParseMode, StepKeyword, parse_action_word, parse_step_action_word};
use clap::{Args, Parser, Subcommand, ValueEnum};
use eyre::{Context, Result};
use keyword_scripts::{
    Cucumber, KeywordTestCase, KeywordTestStep, Robot, ScriptWriter, Translator,
};
use unic_langid::LanguageIdentifier;

use keyword_scripts_cli::config::{CliConfig, LogLevel, parse_language};
use keyword_scripts_cli::document::TestCaseDocument;
use keyword_scripts_cli::error::CliError;
use keyword_scripts_cli::localisation::FluentTranslator;
use keyword_scripts_cli::logging::init_logging;
use keyword_scripts_cli::output::{write_fragments, write_script};

/// Parse action words and render keyword test cases as Gherkin or Robot
/// Framework scripts.
#[derive(Parser)]
#[command(name = "kwscript", author, version, about)]
pub(crate) struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, value_parser = parse_log_level)]
    log_level: Option<LogLevel>,
    /// Script language used when a document names none, e.g. `fr`.
    #[arg(long, global = true, value_parser = parse_locale)]
    locale: Option<LanguageIdentifier>,
    /// HTML-escape test-case references in Gherkin output.
    #[arg(long, global = true)]
    escape_arrows: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Supported commands.
#[derive(Subcommand)]
enum Commands {
    /// Parse one action word and list its fragments.
    Parse(ParseArgs),
    /// Render a JSON test case document as a script.
    Render(RenderArgs),
    /// Preview a single step line.
    Step(StepArgs),
}

#[derive(Args)]
struct ParseArgs {
    /// Parse as a library definition instead of a test step.
    #[arg(long)]
    library: bool,
    /// The action word.
    text: String,
}

#[derive(Args)]
struct RenderArgs {
    #[command(flatten)]
    dialect: DialectArgs,
    /// Path of the test case document.
    file: PathBuf,
}

#[derive(Args)]
struct StepArgs {
    #[command(flatten)]
    dialect: DialectArgs,
    /// Step keyword (given, when, then, and, but).
    keyword: String,
    /// The action word, in step syntax.
    text: String,
}

#[derive(Args)]
struct DialectArgs {
    /// Target script format.
    #[arg(long, value_enum, default_value_t = DialectKind::Cucumber)]
    dialect: DialectKind,
    /// Robot Framework resource file imported by the suite.
    #[arg(long)]
    resource: Option<String>,
    /// Robot Framework library resolving dataset parameters.
    #[arg(long)]
    parameter_library: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum DialectKind {
    Cucumber,
    Robot,
}

impl DialectArgs {
    fn robot(&self) -> Robot {
        let defaults = Robot::default();
        Robot::new(
            self.resource
                .clone()
                .unwrap_or_else(|| defaults.resource().to_string()),
            self.parameter_library
                .clone()
                .unwrap_or_else(|| defaults.parameter_library().to_string()),
        )
    }

    fn write_script(
        &self,
        test_case: &KeywordTestCase,
        translator: &dyn Translator,
        escape_arrows: bool,
    ) -> String {
        match self.dialect {
            DialectKind::Cucumber => {
                ScriptWriter::new(Cucumber).write_script(test_case, translator, escape_arrows)
            }
            DialectKind::Robot => {
                ScriptWriter::new(self.robot()).write_script(test_case, translator, escape_arrows)
            }
        }
    }

    fn write_step_script(
        &self,
        step: &KeywordTestStep,
        translator: &dyn Translator,
        locale: &LanguageIdentifier,
        escape_arrows: bool,
    ) -> String {
        match self.dialect {
            DialectKind::Cucumber => ScriptWriter::new(Cucumber).write_step_script(
                step,
                translator,
                locale,
                escape_arrows,
            ),
            DialectKind::Robot => ScriptWriter::new(self.robot()).write_step_script(
                step,
                translator,
                locale,
                escape_arrows,
            ),
        }
    }
}

fn parse_log_level(raw: &str) -> Result<LogLevel, String> {
    raw.parse().map_err(|error: CliError| error.to_string())
}

fn parse_locale(raw: &str) -> Result<LanguageIdentifier, String> {
    parse_language(raw).map_err(|error| error.to_string())
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::from_env()
        .wrap_err("invalid KWSCRIPT_* environment configuration")?
        .apply_overrides(cli.log_level, cli.locale, cli.escape_arrows);
    init_logging(&config);
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "starting kwscript");

    let mut stdout = io::stdout().lock();
    match cli.command {
        Commands::Parse(args) => handle_parse(&mut stdout, &args)?,
        Commands::Render(args) => handle_render(&mut stdout, &args, &config)?,
        Commands::Step(args) => handle_step(&mut stdout, &args, &config)?,
    }
    stdout.flush().wrap_err("failed to flush output to stdout")
}

fn handle_parse(out: &mut dyn Write, args: &ParseArgs) -> Result<()> {
    let mode = if args.library {
        ParseMode::Library
    } else {
        ParseMode::Step
    };
    let action_word =
        parse_action_word(&args.text, mode).map_err(|source| CliError::ActionWord {
            text: args.text.clone(),
            source,
        })?;
    write_fragments(out, &action_word)
}

fn handle_render(out: &mut dyn Write, args: &RenderArgs, config: &CliConfig) -> Result<()> {
    let test_case = TestCaseDocument::load(&args.file)?
        .into_test_case(&config.locale)
        .wrap_err_with(|| format!("failed to build test case from {}", args.file.display()))?;
    let translator = FluentTranslator::new()?;
    let script = args
        .dialect
        .write_script(&test_case, &translator, config.escape_arrows);
    write_script(out, &script)
}

fn handle_step(out: &mut dyn Write, args: &StepArgs, config: &CliConfig) -> Result<()> {
    let keyword: StepKeyword = args.keyword.parse().map_err(CliError::from)?;
    let typed = parse_step_action_word(&args.text).map_err(|source| CliError::ActionWord {
        text: args.text.clone(),
        source,
    })?;
    let step = KeywordTestStep::inline(keyword, typed);
    let translator = FluentTranslator::new()?;
    let line =
        args.dialect
            .write_step_script(&step, &translator, &config.locale, config.escape_arrows);
    write_script(out, &line)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_line_is_well_formed() {
        Cli::command().debug_assert();
    }
}
