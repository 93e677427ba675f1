mod common;
mod error;
pub mod parser;
mod prompt;
mod start;
mod status;
mod stop;
mod ui;

use crate::cloud::ManagedImage;
use clap::Parser;
pub use error::CliError;
use parser::Cli;

// Helper function to parse args
pub fn parse_args() -> Cli {
    Cli::parse()
}

// Main CLI execution function, receives parsed args
pub async fn run(cli: Cli) -> Result<(), CliError> {
    let image = ManagedImage::from_env();
    // Match the command and call its specific run method
    match &cli.command {
        parser::Commands::Start(cmd) => cmd.run(&cli, &image).await,
        parser::Commands::Status(cmd) => cmd.run(&cli, &image).await,
        parser::Commands::Stop(cmd) => cmd.run(&cli, &image).await,
    }
}
