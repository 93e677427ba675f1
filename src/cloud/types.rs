use std::env;
use std::fmt;
use std::path::PathBuf;

// Appliance image this tool manages. Both values can be overridden through
// the environment for accounts that bake their own copy of the image.
const DEFAULT_IMAGE_ID: &str = "ami-030e410551d9b5fa5";
const DEFAULT_INSTANCE_TYPE: &str = "t3a.medium";

pub const IMAGE_ID_ENV: &str = "AMICTL_IMAGE_ID";
pub const INSTANCE_TYPE_ENV: &str = "AMICTL_INSTANCE_TYPE";

/// The machine image whose instances this tool owns, plus the instance type
/// launched from it. Built once at startup and passed by reference into
/// every command handler; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedImage {
    pub image_id: String,
    pub instance_type: String,
}

impl Default for ManagedImage {
    fn default() -> Self {
        Self {
            image_id: DEFAULT_IMAGE_ID.to_string(),
            instance_type: DEFAULT_INSTANCE_TYPE.to_string(),
        }
    }
}

impl ManagedImage {
    /// Compiled-in defaults with environment overrides applied.
    pub fn from_env() -> Self {
        Self {
            image_id: env::var(IMAGE_ID_ENV).unwrap_or_else(|_| DEFAULT_IMAGE_ID.to_string()),
            instance_type: env::var(INSTANCE_TYPE_ENV)
                .unwrap_or_else(|_| DEFAULT_INSTANCE_TYPE.to_string()),
        }
    }
}

/// Credential profile and region selectors passed to every provider call.
#[derive(Debug, Clone)]
pub struct AwsSettings {
    pub profile: String,
    pub region: String,
}

/// Lifecycle state of an instance as reported by the provider. Only the
/// states the tool treats specially get their own variant; everything else
/// is carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceState {
    Pending,
    Running,
    ShuttingDown,
    Terminated,
    Other(String),
}

impl From<&str> for InstanceState {
    fn from(name: &str) -> Self {
        match name {
            "pending" => InstanceState::Pending,
            "running" => InstanceState::Running,
            "shutting-down" => InstanceState::ShuttingDown,
            "terminated" => InstanceState::Terminated,
            other => InstanceState::Other(other.to_string()),
        }
    }
}

impl InstanceState {
    pub fn as_str(&self) -> &str {
        match self {
            InstanceState::Pending => "pending",
            InstanceState::Running => "running",
            InstanceState::ShuttingDown => "shutting-down",
            InstanceState::Terminated => "terminated",
            InstanceState::Other(name) => name,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, InstanceState::Running)
    }
}

impl fmt::Display for InstanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One instance as observed through `describe-instances`. The tool never
/// owns these; it only queries and commands them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub id: String,
    pub image_id: String,
    pub public_ip: Option<String>,
    pub state: InstanceState,
}

/// Everything `run-instances` needs beyond the profile/region settings.
#[derive(Debug, Clone)]
pub struct LaunchRequest {
    pub image_id: String,
    pub instance_type: String,
    pub key_name: String,
    /// Cloud-init file handed to the CLI as `--user-data file://…`.
    pub user_data: Option<PathBuf>,
}
