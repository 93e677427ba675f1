use super::error::CliError;
use super::parser::Cli;
use crate::cloud::{preflight, AwsCli, AwsSettings};
use crate::executor::LocalCommandExecutor;
use tracing::debug;

/// Builds the provider for the given CLI flags after running the
/// environment preflight (CLI binary present, profile configured).
pub async fn connect_provider(cli: &Cli) -> Result<AwsCli<LocalCommandExecutor>, CliError> {
    let mut executor = LocalCommandExecutor::new();
    preflight::check_environment(&mut executor, &cli.profile)
        .await
        .map_err(|e| CliError::ConfigError(e.to_string()))?;

    let settings = AwsSettings {
        profile: cli.profile.clone(),
        region: cli.region.clone(),
    };
    debug!(profile = %settings.profile, region = %settings.region, "AWS settings");
    Ok(AwsCli::new(executor, settings))
}
