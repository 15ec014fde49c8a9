//! CSV data quality checker.
//!
//! Profiles a CSV file, scores its quality, and optionally asks an external
//! summarizer program for a narrative summary of the findings.
//!
//! # Exit Status
//! - 0 on success, including when the summarizer fails
//! - 2 when the input file is rejected (not `.csv`, empty, malformed)
//! - 1 for any other failure

mod output;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use dqcheck_core::{
    AnalysisConfig, CommandSummarizer, DataQualityAnalyzer, DisabledSummarizer, DqCheckError,
    LogFormat, Result, SamplingConfig, Summarizer, init_logging,
    config::{DEFAULT_MAX_ROWS, DEFAULT_SAMPLE_SEED},
    prompt::build_prompt,
    report::render_report,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "dqcheck")]
#[command(about = "CSV data quality checker")]
#[command(version)]
#[command(long_about = "
dqcheck - CSV data quality profiling and scoring

Loads a CSV file, samples it down to a fixed number of rows, and reports:
- Missing value percentage per column
- Fully duplicated rows
- Column type tags and numeric summaries
- A 0-100 quality score

A narrative summary can be produced by any program that reads a prompt on
stdin and writes markdown to stdout.

EXAMPLES:
  dqcheck report sales.csv
  dqcheck prompt sales.csv | llm
  dqcheck analyze --summarizer-cmd llm --summarizer-arg=-m --summarizer-arg=gpt-4o sales.csv
")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a file and print the JSON response
    Analyze(AnalyzeArgs),
    /// Print the rendered report and quality score
    Report(InputArgs),
    /// Print the summarizer prompt
    Prompt(InputArgs),
}

#[derive(Args)]
struct GlobalArgs {
    /// Increase verbosity
    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    verbose: u8,

    /// Suppress output
    #[arg(
        short,
        long,
        global = true,
        help = "Suppress all log output except errors"
    )]
    quiet: bool,

    /// Log line format
    #[arg(long, global = true, value_enum, default_value_t = LogFormatArg::Text)]
    log_format: LogFormatArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormatArg {
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Args)]
struct InputArgs {
    /// CSV file to analyze
    #[arg(help = "Path to a .csv file")]
    file: PathBuf,

    /// Row cap for sampling
    #[arg(
        long,
        env = "DQCHECK_MAX_ROWS",
        default_value_t = DEFAULT_MAX_ROWS,
        help = "Sample files larger than this many rows"
    )]
    max_rows: usize,

    /// Sampler seed
    #[arg(
        long,
        env = "DQCHECK_SEED",
        default_value_t = DEFAULT_SAMPLE_SEED,
        help = "Seed for reproducible row sampling"
    )]
    seed: u64,
}

#[derive(Args)]
struct AnalyzeArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output file path
    #[arg(short, long, help = "Write the JSON response to this file instead of stdout")]
    output: Option<PathBuf>,

    /// Summarizer program
    #[arg(
        long,
        env = "DQCHECK_SUMMARIZER_CMD",
        help = "Program that reads the prompt on stdin and prints a summary"
    )]
    summarizer_cmd: Option<String>,

    /// Summarizer program arguments
    #[arg(
        long,
        allow_hyphen_values = true,
        help = "Argument passed to the summarizer program (repeatable)"
    )]
    summarizer_arg: Vec<String>,

    /// Summarizer timeout in seconds
    #[arg(long, help = "Give up on the summarizer after this many seconds")]
    summarizer_timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(
        cli.global.verbose,
        cli.global.quiet,
        cli.global.log_format.into(),
    ) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            if e.is_client_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Analyze(args) => analyze(args).await,
        Command::Report(args) => report(args).await,
        Command::Prompt(args) => prompt(args).await,
    }
}

/// Runs the full pipeline and emits the JSON response.
async fn analyze(args: &AnalyzeArgs) -> Result<()> {
    let summarizer: Arc<dyn Summarizer> = match &args.summarizer_cmd {
        Some(program) => {
            let mut summarizer =
                CommandSummarizer::new(program.as_str()).with_args(args.summarizer_arg.iter().cloned());
            if let Some(seconds) = args.summarizer_timeout {
                summarizer = summarizer.with_timeout(Duration::from_secs(seconds));
            }
            Arc::new(summarizer)
        }
        None => {
            info!("No summarizer configured; the summary will carry a warning");
            Arc::new(DisabledSummarizer)
        }
    };

    let analyzer = DataQualityAnalyzer::new(analysis_config(&args.input), summarizer)?;
    let (file_name, content) = read_input(&args.input.file).await?;
    let outcome = analyzer.analyze(&file_name, &content).await?;

    let json = output::response_json(&outcome.response)?;
    match &args.output {
        Some(path) => output::save_json(&json, path).await,
        None => {
            println!("{}", json);
            Ok(())
        }
    }
}

/// Prints the rendered report followed by the score.
async fn report(args: &InputArgs) -> Result<()> {
    let analyzer = DataQualityAnalyzer::new(analysis_config(args), Arc::new(DisabledSummarizer))?;
    let (file_name, content) = read_input(&args.file).await?;
    let report = analyzer.profile(&file_name, &content)?;

    print!("{}", render_report(&report));
    println!("Data Quality Score: {}", report.quality_score());
    Ok(())
}

/// Prints the prompt a summarizer would receive.
async fn prompt(args: &InputArgs) -> Result<()> {
    let analyzer = DataQualityAnalyzer::new(analysis_config(args), Arc::new(DisabledSummarizer))?;
    let (file_name, content) = read_input(&args.file).await?;
    let report = analyzer.profile(&file_name, &content)?;

    println!("{}", build_prompt(&render_report(&report)));
    Ok(())
}

fn analysis_config(args: &InputArgs) -> AnalysisConfig {
    AnalysisConfig::new().with_sampling(
        SamplingConfig::new()
            .with_max_rows(args.max_rows)
            .with_seed(args.seed),
    )
}

/// Reads a file and returns its base name with its content.
async fn read_input(path: &Path) -> Result<(String, Vec<u8>)> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            DqCheckError::input_format(format!("Not a file path: {}", path.display()))
        })?;

    let content = tokio::fs::read(path).await.map_err(|e| DqCheckError::Io {
        context: format!("Failed to read {}", path.display()),
        source: e,
    })?;

    info!("Read {} bytes from {}", content.len(), path.display());
    Ok((file_name, content))
}
