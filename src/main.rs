//! CLI entry point for the connector-pipe puzzle solver

use clap::Parser;
use pipelock::io::cli::{Cli, FileProcessor};
use pipelock::io::configuration::DEFAULT_LOG_FILTER;

fn main() -> pipelock::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process().map(|_| ())
}
