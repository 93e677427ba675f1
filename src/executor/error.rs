use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum ExecutorError {
    #[error("Empty command line")]
    EmptyCommand,

    #[error("Failed to spawn command: {0}")]
    Spawn(String),

    #[error("Generic executor error: {0}")]
    Other(String),
}
