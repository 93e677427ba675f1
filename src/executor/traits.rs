use async_trait::async_trait;

use super::{CommandResult, ExecutorError};

/// A trait for executing external commands in a uniform, mockable way.
#[async_trait]
pub trait CommandExecutor {
    /// Execute a command line and return a `CommandResult` containing
    /// stdout/stderr/exit code.
    async fn execute_command(&mut self, command: &str) -> Result<CommandResult, ExecutorError>;
}
