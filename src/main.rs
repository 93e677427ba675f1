use amictl::cli::parser::Commands;
use amictl::cli::CliError;
use colored::*;
use std::process;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli_args = amictl::cli::parse_args();

    let progress_likely_active = match &cli_args.command {
        Commands::Status(status_args) => !status_args.no_progress,
        _ => false,
    };

    // Setup tracing subscriber
    // Hide INFO while the spinner is active so its line stays readable;
    // verbosity flags and AMICTL_LOG override this.
    let default_level = if progress_likely_active && cli_args.verbose == 0 {
        LevelFilter::WARN
    } else {
        match cli_args.verbose {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var("AMICTL_LOG")
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Execute the command
    if let Err(e) = amictl::cli::run(cli_args).await {
        match e {
            // A declined confirmation is not an error, but the exit code
            // still reports that nothing was done
            CliError::Cancelled(message) => eprintln!("{}", message.yellow()),
            other => eprintln!("{}: {}", "Error".red().bold(), other),
        }
        process::exit(1);
    }
}
