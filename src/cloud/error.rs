use crate::executor::{ExecutorError, OutputError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CloudError {
    #[error("Executor error: {0}")]
    Executor(#[from] ExecutorError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("Command '{cmd}' failed: {message}")]
    CommandFailed { cmd: String, message: String },
}

pub type CloudResult<T> = Result<T, CloudError>;
