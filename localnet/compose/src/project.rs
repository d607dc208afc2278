use std::path::{Path, PathBuf};

use localnet_config::constants;
use tracing::debug;

use crate::{
    errors::ComposeRunnerError,
    manifest::{ComposeManifest, ManifestError},
};

/// Compose file, project directory, and log directory of the single local
/// network instance. The orchestrator's own state is the source of truth;
/// this only fixes where its inputs live.
#[derive(Clone, Debug)]
pub struct ComposeProject {
    project_dir: PathBuf,
    compose_file: PathBuf,
    log_dir: PathBuf,
}

impl ComposeProject {
    /// Resolve the project against the current working directory, honoring
    /// `LOCALNET_COMPOSE_FILE` and `LOCALNET_LOG_DIR` overrides.
    pub fn discover() -> Result<Self, ComposeRunnerError> {
        let project_dir = std::env::current_dir().map_err(ComposeRunnerError::WorkingDir)?;
        Ok(Self::in_dir(project_dir))
    }

    /// Build a project rooted at `project_dir`.
    #[must_use]
    pub fn in_dir(project_dir: PathBuf) -> Self {
        let compose_file = absolute_in(&project_dir, constants::compose_file());
        let log_dir = absolute_in(&project_dir, constants::log_dir());

        debug!(
            project_dir = %project_dir.display(),
            compose_file = %compose_file.display(),
            log_dir = %log_dir.display(),
            "resolved compose project"
        );

        Self {
            project_dir,
            compose_file,
            log_dir,
        }
    }

    #[must_use]
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    #[must_use]
    pub fn compose_file(&self) -> &Path {
        &self.compose_file
    }

    #[must_use]
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Load the compose manifest backing this project.
    pub fn manifest(&self) -> Result<ComposeManifest, ManifestError> {
        ComposeManifest::load(&self.compose_file)
    }
}

fn absolute_in(project_dir: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        project_dir.join(path)
    }
}
