use crate::executor::{CommandExecutor, ExecutorError};
use semver::{Version, VersionReq};
use thiserror::Error;
use tracing::{debug, warn};

// Versions below this miss `--output json` defaults the tool relies on.
const MIN_CLI_VERSION: &str = ">= 2.2.0";

#[derive(Error, Debug)]
pub enum PreflightError {
    #[error("The 'aws' CLI could not be found or executed. Is it installed and on PATH?")]
    CliNotFound,
    #[error("AWS profile '{0}' was not found. Check `aws configure list-profiles`.")]
    ProfileNotFound(String),
    #[error("Failed to execute command: {0}")]
    CommandFailed(#[from] ExecutorError),
}

/// Checks that the `aws` CLI is present and that the given credential
/// profile exists. An outdated CLI version only warns; a missing binary or
/// profile is fatal. Runs before any command touches the provider.
pub async fn check_environment<E: CommandExecutor>(
    executor: &mut E,
    profile: &str,
) -> Result<(), PreflightError> {
    let version_cmd = "aws --version";
    match executor.execute_command(version_cmd).await {
        Ok(result) if result.is_success() => {
            let output = result
                .output
                .to_stdout_string()
                .unwrap_or_default();
            check_cli_version(&output);
        }
        Ok(result) => {
            debug!(
                "'aws --version' failed: {}",
                result.output.to_stderr_string().unwrap_or_default()
            );
            return Err(PreflightError::CliNotFound);
        }
        Err(e) => {
            debug!("Error executing 'aws --version': {}", e);
            return Err(PreflightError::CliNotFound);
        }
    }

    let profile_cmd = format!("aws configure list --profile {}", profile);
    let result = executor.execute_command(&profile_cmd).await?;
    if !result.is_success() {
        debug!(
            "'{}' failed: {}",
            profile_cmd,
            result.output.to_stderr_string().unwrap_or_default()
        );
        return Err(PreflightError::ProfileNotFound(profile.to_string()));
    }

    Ok(())
}

/// Warn-only version gate. An unparseable banner is skipped rather than
/// failing the run, so unusual builds of the CLI stay usable.
fn check_cli_version(output: &str) {
    match extract_cli_version(output) {
        Some(version) => {
            let req = VersionReq::parse(MIN_CLI_VERSION).unwrap(); // Should not fail
            if req.matches(&version) {
                debug!("Detected AWS CLI version {}", version);
            } else {
                warn!(
                    "Detected AWS CLI version {} is below minimum {}; behavior may differ",
                    version, MIN_CLI_VERSION
                );
            }
        }
        None => {
            warn!(
                "Could not parse AWS CLI version from '{}'; skipping version check",
                output.trim()
            );
        }
    }
}

/// Pulls the semver part out of an `aws --version` banner.
/// Example: "aws-cli/2.15.30 Python/3.11.8 Linux/6.1.0 exe/x86_64" -> 2.15.30
fn extract_cli_version(output: &str) -> Option<Version> {
    let token = output.split_whitespace().next()?;
    let version_str = token.strip_prefix("aws-cli/")?;
    // Strip trailing non-digit characters (pre-release tags, punctuation)
    let version_str = version_str.trim_end_matches(|c: char| !c.is_ascii_digit());
    Version::parse(version_str).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::CommandResult;
    use async_trait::async_trait;
    use std::collections::HashMap;

    struct MockExecutor {
        responses: HashMap<String, Result<CommandResult, ExecutorError>>,
        commands: Vec<String>,
    }

    impl MockExecutor {
        fn new() -> Self {
            Self {
                responses: HashMap::new(),
                commands: Vec::new(),
            }
        }

        fn add_response(&mut self, command: &str, result: Result<CommandResult, ExecutorError>) {
            self.responses.insert(command.to_string(), result);
        }
    }

    #[async_trait]
    impl CommandExecutor for MockExecutor {
        async fn execute_command(&mut self, command: &str) -> Result<CommandResult, ExecutorError> {
            self.commands.push(command.to_string());
            self.responses.get(command).cloned().ok_or_else(|| {
                ExecutorError::Other(format!("Mock response not found for command: {}", command))
            })?
        }
    }

    fn success(stdout: &str) -> Result<CommandResult, ExecutorError> {
        let mut result = CommandResult::new("mock_command");
        result.output.stdout = stdout.as_bytes().to_vec();
        result.output.exit_code = 0;
        Ok(result)
    }

    fn failure(stderr: &str) -> Result<CommandResult, ExecutorError> {
        let mut result = CommandResult::new("mock_command");
        result.output.stderr = stderr.as_bytes().to_vec();
        result.output.exit_code = 255;
        Ok(result)
    }

    #[tokio::test]
    async fn passes_with_cli_and_profile_present() {
        let mut executor = MockExecutor::new();
        executor.add_response(
            "aws --version",
            success("aws-cli/2.15.30 Python/3.11.8 Linux/6.1.0 exe/x86_64"),
        );
        executor.add_response("aws configure list --profile default", success("profile"));

        let checked = check_environment(&mut executor, "default").await;
        assert!(checked.is_ok());
        assert_eq!(
            executor.commands,
            vec![
                "aws --version".to_string(),
                "aws configure list --profile default".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn missing_cli_is_fatal() {
        let mut executor = MockExecutor::new();
        executor.add_response(
            "aws --version",
            Err(ExecutorError::Spawn("aws: No such file or directory".into())),
        );

        let checked = check_environment(&mut executor, "default").await;
        assert!(matches!(checked, Err(PreflightError::CliNotFound)));
        // The profile check never runs when the binary is missing
        assert_eq!(executor.commands, vec!["aws --version".to_string()]);
    }

    #[tokio::test]
    async fn missing_profile_is_fatal() {
        let mut executor = MockExecutor::new();
        executor.add_response("aws --version", success("aws-cli/2.15.30 Python/3.11.8"));
        executor.add_response(
            "aws configure list --profile staging",
            failure("The config profile (staging) could not be found"),
        );

        let checked = check_environment(&mut executor, "staging").await;
        match checked {
            Err(PreflightError::ProfileNotFound(profile)) => assert_eq!(profile, "staging"),
            other => panic!("expected ProfileNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn old_cli_version_only_warns() {
        let mut executor = MockExecutor::new();
        executor.add_response("aws --version", success("aws-cli/1.18.69 Python/3.8.10"));
        executor.add_response("aws configure list --profile default", success("profile"));

        // An old version must not abort the run
        let checked = check_environment(&mut executor, "default").await;
        assert!(checked.is_ok());
    }

    #[tokio::test]
    async fn garbled_version_banner_is_skipped() {
        let mut executor = MockExecutor::new();
        executor.add_response("aws --version", success("something unexpected entirely"));
        executor.add_response("aws configure list --profile default", success("profile"));

        let checked = check_environment(&mut executor, "default").await;
        assert!(checked.is_ok());
    }

    #[test]
    fn extracts_version_from_banner() {
        let version = extract_cli_version("aws-cli/2.15.30 Python/3.11.8 Linux/6.1.0");
        assert_eq!(version, Some(Version::parse("2.15.30").unwrap()));
    }

    #[test]
    fn version_comparison_is_numeric_not_lexical() {
        // 2.13 is NEWER than 2.2; a string comparison would get this wrong
        let version = extract_cli_version("aws-cli/2.13.0 Python/3.11.8").unwrap();
        let req = VersionReq::parse(MIN_CLI_VERSION).unwrap();
        assert!(req.matches(&version));
    }

    #[test]
    fn rejects_banner_without_prefix() {
        assert_eq!(extract_cli_version("2.15.30 Python/3.11.8"), None);
        assert_eq!(extract_cli_version(""), None);
    }
}
