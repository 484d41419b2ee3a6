mod args;
mod generator;
mod writer;

use std::process::ExitCode;

use args::CliArgs;
use clap::Parser;
use writer::write_log;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    match write_log(args.output(), *args.rows(), *args.seed()).await {
        Ok(()) => {
            println!("Wrote {} rows to {}", args.rows(), args.output().display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("could not write {}: {e}", args.output().display());
            ExitCode::FAILURE
        }
    }
}
