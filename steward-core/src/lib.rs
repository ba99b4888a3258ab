//! Steward Core Library
//!
//! Desired-state reconciliation engine: fetches deployment manifests from
//! the control API and converges the local compose runtime onto them.

pub mod config;
pub mod error;
pub mod launcher;
pub mod manifests;
pub mod paths;
pub mod reconciler;
pub mod runtime;

// Re-export commonly used items
pub use config::Config;
pub use error::{Result, StewardError};
pub use launcher::StackLauncher;
pub use manifests::{HttpManifestSource, Manifest, ManifestSource};
pub use reconciler::{ReconcileReport, Reconciler, StackFailure};
pub use runtime::{DockerCompose, OrchestrationRuntime, StackStatus};
