use std::{fs, path::Path};

use tracing::{debug, info};

use crate::{
    commands::{compose_down, docker_network_prune},
    errors::ComposeRunnerError,
    project::ComposeProject,
};

/// Tear the network down and clear local state.
///
/// Safe to call when nothing is running: `compose down` on an empty
/// project and clearing an absent log directory are both successes.
pub async fn teardown_network(project: &ComposeProject) -> Result<(), ComposeRunnerError> {
    info!("stopping the network containers");
    compose_down(project.compose_file(), project.project_dir()).await?;

    if localnet_env::localnet_keep_logs() {
        info!(log_dir = %project.log_dir().display(), "keep-logs set; preserving network logs");
    } else {
        info!(log_dir = %project.log_dir().display(), "clearing network logs and temp files");
        clear_dir_contents(project.log_dir()).map_err(|source| ComposeRunnerError::LogCleanup {
            path: project.log_dir().to_path_buf(),
            source,
        })?;
    }

    docker_network_prune().await?;
    Ok(())
}

/// Remove everything inside `path`, keeping the directory itself.
fn clear_dir_contents(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        debug!(path = %path.display(), "log directory absent; nothing to clear");
        return Ok(());
    }

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(entry.path())?;
        } else {
            fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}
