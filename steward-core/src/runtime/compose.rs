//! Docker compose runtime integration.
//!
//! Shells out to the `docker` CLI: `compose ls --format json` for stack
//! state, `compose -f <file> -p <project> up -d` to bring a stack up.

use crate::error::{Result, StewardError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, info};

use super::{OrchestrationRuntime, StackStatus};

/// Orchestration runtime backed by the docker compose CLI.
#[derive(Clone)]
pub struct DockerCompose {
    /// Path to the docker binary.
    binary_path: PathBuf,
}

impl DockerCompose {
    /// Create a runtime, auto-detecting the docker binary location.
    pub fn new() -> Result<Self> {
        let binary_path = Self::find_docker_binary()?;
        Ok(Self { binary_path })
    }

    /// Create a runtime with a specific docker binary path.
    pub fn with_path(binary_path: PathBuf) -> Self {
        Self { binary_path }
    }

    /// Find the docker binary in common locations.
    fn find_docker_binary() -> Result<PathBuf> {
        // Check PATH first using `which`
        if let Ok(output) = std::process::Command::new("which").arg("docker").output() {
            if output.status.success() {
                let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !path.is_empty() {
                    return Ok(PathBuf::from(path));
                }
            }
        }

        // Check common installation locations
        let common_paths = ["/usr/local/bin/docker", "/usr/bin/docker", "/opt/homebrew/bin/docker"];

        for path in common_paths {
            let path = PathBuf::from(path);
            if path.exists() {
                return Ok(path);
            }
        }

        Err(StewardError::InvalidConfig {
            reason: "docker binary not found; install docker or set STEWARD_DOCKER_BIN"
                .to_string(),
        })
    }

    /// Parse `compose ls --format json` output.
    fn parse_stack_list(output: &[u8]) -> Result<Vec<StackStatus>> {
        serde_json::from_slice(output).map_err(|e| StewardError::ParseFailed {
            reason: format!("compose ls output: {}", e),
        })
    }
}

#[async_trait]
impl OrchestrationRuntime for DockerCompose {
    async fn list_stacks(&self) -> Result<Vec<StackStatus>> {
        let output = Command::new(&self.binary_path)
            .args(["compose", "ls", "--format", "json"])
            .output()
            .await
            .map_err(|e| StewardError::RuntimeQueryFailed {
                stderr: format!("failed to run {}: {}", self.binary_path.display(), e),
            })?;

        if !output.status.success() {
            return Err(StewardError::RuntimeQueryFailed {
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        let stacks = Self::parse_stack_list(&output.stdout)?;
        debug!("Runtime reports {} stacks", stacks.len());
        Ok(stacks)
    }

    async fn launch_stack(&self, compose_file: &Path, project: &str) -> Result<()> {
        info!("Launching stack {} from {}", project, compose_file.display());

        let output = Command::new(&self.binary_path)
            .arg("compose")
            .arg("-f")
            .arg(compose_file)
            .arg("-p")
            .arg(project)
            .arg("up")
            .arg("-d")
            .output()
            .await
            .map_err(|e| StewardError::LaunchFailed {
                stack: project.to_string(),
                reason: format!("failed to run {}: {}", self.binary_path.display(), e),
            })?;

        if !output.status.success() {
            return Err(StewardError::LaunchFailed {
                stack: project.to_string(),
                reason: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        Ok(())
    }
}
