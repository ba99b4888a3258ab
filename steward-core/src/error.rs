//! Error types for steward.
//!
//! All errors use `thiserror` for ergonomic error handling and proper error chains.

use thiserror::Error;

/// Result type alias for steward operations.
pub type Result<T> = std::result::Result<T, StewardError>;

/// Main error type for steward.
///
/// Every variant is fatal to the current reconciliation pass. Nothing is
/// retried internally; the external scheduler re-runs the whole pass, which
/// is safe because reconciliation is idempotent.
#[derive(Error, Debug)]
pub enum StewardError {
    // Configuration errors
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // Manifest source errors
    #[error("Failed to fetch manifests from {url}: {reason}")]
    FetchFailed { url: String, reason: String },

    // Orchestration runtime errors
    #[error("Runtime list command failed: {stderr}")]
    RuntimeQueryFailed { stderr: String },

    #[error("Failed to parse runtime output: {reason}")]
    ParseFailed { reason: String },

    #[error("Failed to launch stack {stack}: {reason}")]
    LaunchFailed { stack: String, reason: String },
}
