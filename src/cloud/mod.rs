pub mod aws_cli;
pub mod error;
pub mod keys;
pub mod preflight;
pub mod types;

pub use aws_cli::AwsCli;
pub use error::{CloudError, CloudResult};
pub use keys::{KeyStore, KeyStoreError, DEFAULT_KEY_NAME};
pub use types::{AwsSettings, Instance, InstanceState, LaunchRequest, ManagedImage};

use async_trait::async_trait;

/// The narrow boundary between the lifecycle flows and the cloud. One real
/// implementation drives the `aws` CLI; tests substitute their own.
#[async_trait]
pub trait CloudProvider: Send {
    /// Ask the provider to launch one instance. Returns the IDs the
    /// provider reports as launched.
    async fn launch(&mut self, request: &LaunchRequest) -> CloudResult<Vec<String>>;

    /// Describe every instance visible to the configured profile and
    /// region, whatever image it was launched from.
    async fn list(&mut self) -> CloudResult<Vec<Instance>>;

    /// Request termination of a single instance.
    async fn terminate(&mut self, instance_id: &str) -> CloudResult<()>;

    /// Create a named key pair and return its private-key material.
    async fn create_key_pair(&mut self, key_name: &str) -> CloudResult<String>;
}
