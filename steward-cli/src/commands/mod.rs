//! CLI command implementations.

mod run;
mod status;

pub use run::run;
pub use status::status;

use std::sync::Arc;
use steward_core::{Config, DockerCompose, OrchestrationRuntime};

/// Build the orchestration runtime from configuration.
pub(crate) fn runtime_from(config: &Config) -> steward_core::Result<Arc<dyn OrchestrationRuntime>> {
    Ok(match &config.docker_bin {
        Some(path) => Arc::new(DockerCompose::with_path(path.clone())),
        None => Arc::new(DockerCompose::new()?),
    })
}
