use super::common::connect_provider;
use super::error::CliError;
use super::parser::Cli;
use super::prompt::TerminalPrompter;
use super::ui;
use crate::cloud::ManagedImage;
use crate::lifecycle::{InstanceManager, TerminateOutcome};
use clap::Args;
use tracing::{info, instrument};

#[derive(Debug, Args)]
pub struct Stop {}

impl Stop {
    #[instrument(name = "stop", skip(self, cli_args, image))]
    pub async fn run(&self, cli_args: &Cli, image: &ManagedImage) -> Result<(), CliError> {
        let provider = connect_provider(cli_args).await?;
        let prompter = TerminalPrompter::new();
        let mut manager = InstanceManager::new(image, provider, &prompter);

        match manager.stop().await {
            Ok(TerminateOutcome::Terminated(id)) => {
                info!(
                    "{}",
                    ui::format_success(&format!("Termination of {} requested.", id))
                );
                Ok(())
            }
            Ok(TerminateOutcome::Cancelled) => {
                println!(
                    "{}",
                    ui::format_warning("Cancelling... No instance will be stopped.")
                );
                Ok(())
            }
            // The failure has been logged by the manager; the run completes
            Ok(TerminateOutcome::Failed(_)) => Ok(()),
            Err(e) => Err(CliError::OperationFailed(e.to_string())),
        }
    }
}
