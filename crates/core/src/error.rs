//! Error types for dotup-core

use thiserror::Error;

/// Errors that can occur while provisioning
///
/// Every variant is fatal at the CLI boundary; the only soft condition in the
/// system (a dependency declared with no groups) is a warning, not an error.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manifest error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("repos_directory must be provided when repository dependencies are declared")]
    MissingReposDirectory,

    #[error("Failed to expand '{path}': {message}")]
    Expand { path: String, message: String },

    #[error("Failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command failed with exit code {code:?}: {program}")]
    CommandFailed { program: String, code: Option<i32> },

    #[error("Failed to stat '{path}': {source}")]
    Probe {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
