use std::path::PathBuf;

use thiserror::Error;

use crate::{commands::ComposeCommandError, manifest::ManifestError};

/// Failures surfaced by the compose lifecycle.
#[derive(Debug, Error)]
pub enum ComposeRunnerError {
    #[error("docker is unavailable or not responding")]
    DockerUnavailable,
    #[error(transparent)]
    Compose(#[from] ComposeCommandError),
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error("clearing log directory {}", path.display())]
    LogCleanup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("resolving working directory")]
    WorkingDir(#[source] std::io::Error),
}
