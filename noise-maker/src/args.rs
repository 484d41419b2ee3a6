use std::path::PathBuf;

use clap::Parser;
use derive_getters::Getters;

#[derive(Parser, Debug, Getters)]
#[command(name = "noise-maker")]
#[command(about = "Generate a fake web access log for testing", long_about = None)]
pub struct CliArgs {
    #[arg(long, default_value = "weblog.csv")]
    output: PathBuf,

    #[arg(long, default_value_t = 1000)]
    rows: u64,

    /// Seed for reproducible output; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}
