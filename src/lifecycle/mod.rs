pub mod prompt;
pub mod service;
pub mod types;

pub use prompt::{PromptError, Prompter};
pub use service::{survey_instances, InstanceManager};
pub use types::{
    InstanceSurvey, KeySource, LaunchOutcome, LifecycleError, LifecycleResult, TerminateOutcome,
};
