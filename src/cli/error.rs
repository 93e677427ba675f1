use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Operation failed: {0}")]
    OperationFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Operator backed out of a confirmation. Carries the message to show;
    /// printed without the usual error prefix.
    #[error("{0}")]
    Cancelled(String),
}
