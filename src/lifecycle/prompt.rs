use crate::cloud::Instance;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Failed to read input: {0}")]
    Input(String),
}

/// Interaction seam for the lifecycle flows. The terminal-backed
/// implementation lives with the CLI; tests script their answers instead.
pub trait Prompter {
    /// Ask whether another instance should be launched even though
    /// `running` instances of the managed image are already up.
    fn confirm_launch(&self, running: usize) -> Result<bool, PromptError>;

    /// Present the running candidates and ask which one to terminate.
    /// `None` means the operator backed out.
    fn select_instance(&self, candidates: &[Instance]) -> Result<Option<String>, PromptError>;
}
