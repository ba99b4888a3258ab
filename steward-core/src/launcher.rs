//! Stack launcher.
//!
//! Materializes a manifest to the scratch directory and instructs the
//! runtime to bring the stack up. Three sequential steps, each a
//! precondition for the next; any failure aborts with `LaunchFailed`.

use crate::error::{Result, StewardError};
use crate::manifests::Manifest;
use crate::paths;
use crate::runtime::OrchestrationRuntime;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Launches a single stack from its manifest.
pub struct StackLauncher {
    manifest_dir: PathBuf,
    runtime: Arc<dyn OrchestrationRuntime>,
}

impl StackLauncher {
    /// Create a launcher writing into the given scratch directory.
    pub fn new(manifest_dir: PathBuf, runtime: Arc<dyn OrchestrationRuntime>) -> Self {
        Self { manifest_dir, runtime }
    }

    /// Write the manifest to disk and bring its stack up.
    ///
    /// The scratch directory is created if absent; prior existence is not an
    /// error, but any other creation failure (e.g. permissions) aborts
    /// before the write. The manifest file is fully overwritten, never
    /// appended. The write is not atomic against concurrent readers; at
    /// most one pass runs at a time.
    pub async fn launch(&self, manifest: &Manifest) -> Result<()> {
        std::fs::create_dir_all(&self.manifest_dir).map_err(|e| StewardError::LaunchFailed {
            stack: manifest.name.clone(),
            reason: format!("failed to create {}: {}", self.manifest_dir.display(), e),
        })?;

        let path = paths::manifest_path(&self.manifest_dir, &manifest.name);
        std::fs::write(&path, &manifest.content).map_err(|e| StewardError::LaunchFailed {
            stack: manifest.name.clone(),
            reason: format!("failed to write {}: {}", path.display(), e),
        })?;
        debug!("Wrote manifest for {} to {}", manifest.name, path.display());

        self.runtime.launch_stack(&path, &manifest.name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use async_trait::async_trait;
    use std::path::Path;
    use std::sync::Mutex;

    struct RecordingRuntime {
        launches: Mutex<Vec<(PathBuf, String)>>,
    }

    impl RecordingRuntime {
        fn new() -> Self {
            Self { launches: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl OrchestrationRuntime for RecordingRuntime {
        async fn list_stacks(&self) -> Result<Vec<crate::runtime::StackStatus>> {
            Ok(Vec::new())
        }

        async fn launch_stack(&self, compose_file: &Path, project: &str) -> Result<()> {
            self.launches
                .lock()
                .unwrap()
                .push((compose_file.to_path_buf(), project.to_string()));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_launch_writes_manifest_then_invokes_runtime() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = dir.path().join("manifests");
        let runtime = Arc::new(RecordingRuntime::new());
        let launcher = StackLauncher::new(scratch.clone(), runtime.clone());

        let manifest = Manifest {
            name: "web".to_string(),
            content: "services:\n web:\n  image: nginx".to_string(),
        };

        launcher.launch(&manifest).await.unwrap();

        let written = std::fs::read_to_string(scratch.join("web.yml")).unwrap();
        assert_eq!(written, "services:\n web:\n  image: nginx");

        let launches = runtime.launches.lock().unwrap();
        assert_eq!(launches.len(), 1);
        assert_eq!(launches[0].0, scratch.join("web.yml"));
        assert_eq!(launches[0].1, "web");
    }

    #[tokio::test]
    async fn test_launch_overwrites_prior_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = dir.path().to_path_buf();
        std::fs::write(scratch.join("web.yml"), "stale content").unwrap();

        let launcher = StackLauncher::new(scratch.clone(), Arc::new(RecordingRuntime::new()));
        let manifest = Manifest { name: "web".to_string(), content: "fresh".to_string() };
        launcher.launch(&manifest).await.unwrap();

        assert_eq!(std::fs::read_to_string(scratch.join("web.yml")).unwrap(), "fresh");
    }

    #[tokio::test]
    async fn test_launch_fails_when_scratch_dir_cannot_be_created() {
        // A regular file where the scratch directory should be makes
        // create_dir_all fail regardless of privileges.
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("manifests");
        std::fs::write(&blocker, "not a directory").unwrap();

        let launcher = StackLauncher::new(blocker, Arc::new(RecordingRuntime::new()));
        let manifest = Manifest { name: "web".to_string(), content: "x".to_string() };

        let err = launcher.launch(&manifest).await.unwrap_err();
        assert!(matches!(err, StewardError::LaunchFailed { ref stack, .. } if stack == "web"));
    }
}
