use super::prompt::PromptError;
use crate::cloud::{CloudError, Instance, KeyStoreError};
use thiserror::Error;

/// The provider's instance list narrowed to the managed image. Instances
/// of other images are dropped before this type is built and never
/// surface anywhere in the tool.
#[derive(Debug, Clone, Default)]
pub struct InstanceSurvey {
    pub instances: Vec<Instance>,
}

impl InstanceSurvey {
    pub fn running(&self) -> impl Iterator<Item = &Instance> {
        self.instances.iter().filter(|i| i.state.is_running())
    }

    pub fn running_count(&self) -> usize {
        self.running().count()
    }
}

/// Where the key-pair name for a launch comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    /// Operator-supplied name, used as-is without touching the key store.
    Named(String),
    /// Default name; the key pair and its local file are provisioned on
    /// first use.
    Default,
}

/// How a launch attempt ended. A failure of the launch command itself is
/// an outcome, not an error: it has already been logged and the run still
/// completes normally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The provider accepted the request; IDs as it reported them.
    Launched(Vec<String>),
    /// The operator declined to add another instance.
    Declined,
    /// The launch command failed; details were logged.
    Failed,
}

/// How a termination attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminateOutcome {
    /// Termination of this instance was requested successfully.
    Terminated(String),
    /// The terminate command for this instance failed; details were logged.
    Failed(String),
    /// The operator submitted an empty ID to back out.
    Cancelled,
}

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Provider error: {0}")]
    Provider(#[from] CloudError),

    #[error("Key store error: {0}")]
    KeyStore(#[from] KeyStoreError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    #[error("No running instance of the managed image was found")]
    NoRunningInstance,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type LifecycleResult<T> = Result<T, LifecycleError>;
