use super::common::connect_provider;
use super::error::CliError;
use super::parser::Cli;
use super::prompt::TerminalPrompter;
use super::ui;
use crate::cloud::{KeyStore, ManagedImage};
use crate::lifecycle::{InstanceManager, KeySource, LaunchOutcome};
use clap::Args;
use std::fs::File;
use std::path::PathBuf;
use tracing::instrument;

#[derive(Debug, Args)]
pub struct Start {
    /// Key pair name to launch with (provisioned automatically when omitted)
    #[arg(short = 'k', long = "key")]
    key: Option<String>,

    /// Cloud-init file passed to the instance as user data
    #[arg(short = 'i', long = "init-file")]
    init_file: Option<PathBuf>,
}

impl Start {
    #[instrument(name = "start", skip(self, cli_args, image))]
    pub async fn run(&self, cli_args: &Cli, image: &ManagedImage) -> Result<(), CliError> {
        // --- Validate the init file before anything talks to the provider ---
        if let Some(path) = &self.init_file {
            File::open(path).map_err(|e| {
                CliError::ConfigError(format!("Cannot read init file '{}': {}", path.display(), e))
            })?;
        }

        let provider = connect_provider(cli_args).await?;
        let keys = KeyStore::new().map_err(|e| CliError::ConfigError(e.to_string()))?;
        let prompter = TerminalPrompter::new();
        let mut manager = InstanceManager::new(image, provider, &prompter);

        let key = match &self.key {
            Some(name) => KeySource::Named(name.clone()),
            None => KeySource::Default,
        };

        let outcome = manager
            .start(&key, self.init_file.as_deref(), &keys)
            .await
            .map_err(|e| CliError::OperationFailed(e.to_string()))?;

        match outcome {
            LaunchOutcome::Launched(ids) => {
                for id in &ids {
                    println!("Launched instance {}", ui::format_highlight(id));
                }
                Ok(())
            }
            LaunchOutcome::Declined => Err(CliError::Cancelled(
                "Cancelling... No instance will be started.".to_string(),
            )),
            // The failure has been logged by the manager; the run completes
            LaunchOutcome::Failed => Ok(()),
        }
    }
}
