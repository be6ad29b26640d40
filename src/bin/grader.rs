//! Checks an HTML file or URL for the selectors listed in a JSON checks file
//! and prints the presence of each as JSON.
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use html_grader::checks::CHECKSFILE_DEFAULT;
use html_grader::logging::{self, LoggingMode, Verbosity};
use html_grader::source::HTMLFILE_DEFAULT;
use html_grader::{Options, Source};

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum LogMode {
    Full,
    Json,
    #[default]
    Compact,
}

impl From<LogMode> for LoggingMode {
    fn from(mode: LogMode) -> Self {
        match mode {
            LogMode::Full => LoggingMode::Full,
            LogMode::Json => LoggingMode::Json,
            LogMode::Compact => LoggingMode::Compact,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to checks.json
    #[arg(short, long, value_name = "CHECK_FILE", default_value = CHECKSFILE_DEFAULT)]
    checks: PathBuf,

    /// Path to index.html
    #[arg(short, long, value_name = "HTML_FILE", default_value = HTMLFILE_DEFAULT)]
    file: PathBuf,

    /// Provide URL address (takes precedence over --file)
    #[arg(short, long)]
    url: Option<String>,

    /// Turn debugging information on (repeat for higher levels)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogMode::Compact)]
    log_mode: LogMode,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init(Verbosity::from(cli.verbose), cli.log_mode.into()) {
        eprintln!("Failed to initialize logging: {err}");
    }

    match grade(cli).await {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn grade(cli: Cli) -> html_grader::Result<String> {
    let options = Options {
        checks: cli.checks,
        source: Source::from_args(cli.file, cli.url.as_deref())?,
    };
    let report = html_grader::run(&options).await?;
    report.to_pretty_json()
}
