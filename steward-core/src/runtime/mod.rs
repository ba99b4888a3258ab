//! Orchestration runtime abstraction.
//!
//! Steward drives the local container runtime through this trait so the
//! reconciler can be exercised against a test double without a real
//! orchestration tool on the host.

use crate::error::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;

mod compose;

pub use compose::DockerCompose;

/// One stack as reported by the runtime's list capability.
///
/// Field names follow the runtime's JSON convention (`Name`, `Status`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackStatus {
    /// Stack (compose project) name.
    pub name: String,
    /// Raw status text, e.g. `"running(2)"` or `"running(1), exited(1)"`.
    pub status: String,
}

impl StackStatus {
    /// Whether this stack counts as running.
    ///
    /// Deliberately a loose substring match: composite statuses like
    /// `"running(2), exited(1)"` must still count as running.
    pub fn is_running(&self) -> bool {
        self.status.contains("running")
    }
}

/// Capability interface over the local orchestration runtime.
#[async_trait]
pub trait OrchestrationRuntime: Send + Sync {
    /// List every stack the runtime knows about, with raw status text.
    ///
    /// Read-only against runtime state.
    async fn list_stacks(&self) -> Result<Vec<StackStatus>>;

    /// Bring a stack up in detached mode from the given compose file,
    /// using `project` as the stack's identifier.
    async fn launch_stack(&self, compose_file: &Path, project: &str) -> Result<()>;
}
