mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use std::process::ExitCode;

use crate::cli::Cli;
use crate::error::CliError;
use crate::output::Envelope;

fn preprocess() {
    // RUST_LOG controls verbosity; output stays on stderr
    env_logger::init();
}

#[tokio::main]
async fn main() -> ExitCode {
    preprocess();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    // `Cli` carries the api key, so only the subcommand is logged
    log::debug!("command line input recorded: {:?}", cli.command);

    let result = commands::run(&cli).await?;
    let envelope = Envelope::new(cli.command.name(), result);
    output::render(&envelope, cli.format, cli.pretty)
}
