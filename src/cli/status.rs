use super::common::connect_provider;
use super::error::CliError;
use super::parser::Cli;
use super::ui;
use crate::cloud::ManagedImage;
use crate::lifecycle::survey_instances;
use clap::Args;
use tracing::{info, instrument};

#[derive(Debug, Args)]
pub struct Status {
    /// Disable interactive progress spinner and show only logs
    #[arg(long)]
    pub no_progress: bool,
}

impl Status {
    #[instrument(name = "status", skip(self, cli_args, image))]
    pub async fn run(&self, cli_args: &Cli, image: &ManagedImage) -> Result<(), CliError> {
        let mut provider = connect_provider(cli_args).await?;

        // --- Setup Progress Reporting ---
        let pb = if !self.no_progress {
            Some(ui::create_spinner("Querying instances..."))
        } else {
            info!("Progress spinner disabled via --no-progress.");
            None
        };

        let survey_result = survey_instances(&mut provider, image).await;

        // Clear the spinner before printing anything, success or not
        if let Some(pb) = &pb {
            pb.finish_and_clear();
        }

        let survey = survey_result
            .map_err(|e| CliError::OperationFailed(format!("Status query failed: {}", e)))?;

        // --- Print Status ---
        println!(
            "\n{}",
            ui::format_header(&format!("Instances of image {}:", image.image_id))
        );
        if survey.instances.is_empty() {
            println!(
                "  {}",
                ui::format_warning("(None - use 'start' to launch one)")
            );
        } else {
            println!("{}", ui::render_instance_table(&survey.instances));
        }

        Ok(())
    }
}
