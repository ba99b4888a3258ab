//! Desired-state reconciliation.
//!
//! One pass: fetch the desired manifest set, snapshot running stacks, and
//! launch whatever is missing. Matching is by stack name only; a stack
//! already running under its name is satisfied regardless of whether its
//! content still matches the current manifest.

use crate::error::Result;
use crate::launcher::StackLauncher;
use crate::manifests::ManifestSource;
use crate::runtime::OrchestrationRuntime;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Reconciles desired manifests against runtime state.
pub struct Reconciler {
    manifests: Arc<dyn ManifestSource>,
    runtime: Arc<dyn OrchestrationRuntime>,
    launcher: StackLauncher,
    keep_going: bool,
}

/// Report of reconciliation actions taken.
#[derive(Default, Debug)]
pub struct ReconcileReport {
    /// Number of manifests in the desired set.
    pub desired: usize,
    /// Number of stacks already running (skipped).
    pub already_running: usize,
    /// Names of stacks launched this pass, in launch order.
    pub launched: Vec<String>,
    /// Launch failures recorded in keep-going mode; always empty under the
    /// default fail-fast policy, where the first failure aborts the pass.
    pub failed: Vec<StackFailure>,
}

/// One failed launch attempt.
#[derive(Debug)]
pub struct StackFailure {
    /// Stack that failed to launch.
    pub stack: String,
    /// Failure description, including any captured diagnostic output.
    pub reason: String,
}

impl Reconciler {
    /// Create a new reconciler with the default fail-fast launch policy.
    pub fn new(
        manifests: Arc<dyn ManifestSource>,
        runtime: Arc<dyn OrchestrationRuntime>,
        launcher: StackLauncher,
    ) -> Self {
        Self { manifests, runtime, launcher, keep_going: false }
    }

    /// Continue past individual launch failures, recording them in the
    /// report instead of aborting the pass. Default is fail-fast.
    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    /// Run one reconciliation pass.
    ///
    /// Fetches the desired set and the running-stack snapshot (both must
    /// succeed; either failure aborts the pass), then serially launches
    /// every desired stack not currently running, in manifest order.
    /// Re-running with unchanged state performs no writes and no launches.
    pub async fn reconcile(&self) -> Result<ReconcileReport> {
        info!("Reconciling stacks...");

        let manifests = self.manifests.fetch_manifests().await?;
        let stacks = self.runtime.list_stacks().await?;

        let running: HashSet<String> =
            stacks.iter().filter(|s| s.is_running()).map(|s| s.name.clone()).collect();

        let mut report = ReconcileReport { desired: manifests.len(), ..Default::default() };
        info!("Checking {} manifests against {} running stacks", manifests.len(), running.len());

        for manifest in &manifests {
            if running.contains(&manifest.name) {
                debug!("Stack {} already running", manifest.name);
                report.already_running += 1;
                continue;
            }

            info!("Starting {}...", manifest.name);
            match self.launcher.launch(manifest).await {
                Ok(()) => report.launched.push(manifest.name.clone()),
                Err(e) if self.keep_going => {
                    warn!("Failed to launch stack {}: {}", manifest.name, e);
                    report
                        .failed
                        .push(StackFailure { stack: manifest.name.clone(), reason: e.to_string() });
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            "Reconciliation complete: {} desired, {} already running, {} launched",
            report.desired,
            report.already_running,
            report.launched.len()
        );

        Ok(report)
    }
}
