mod analytics;
mod error;
mod fetch;
mod ingest;
mod invariants;
mod models;
mod report;

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::{
    error::AppError,
    invariants::{IMAGE_PATTERN, ImagePattern},
    report::Report,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// URL of the web log file.
    #[arg(long)]
    url: String,

    /// Where the downloaded log is written.
    #[arg(long, default_value = "weblog.csv")]
    output: PathBuf,

    /// Regular expression that marks a request path as an image.
    #[arg(long, default_value = IMAGE_PATTERN)]
    image_pattern: ImagePattern,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    fetch::fetch(&args.url, &args.output).await?;
    let summary = ingest::scan_log(&args.output, &args.image_pattern).await?;
    let report = Report::try_from(&summary)?;
    match args.format {
        ReportFormat::Text => print!("{report}"),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
