use tracing::{debug, info, warn};

use crate::{
    commands::{compose_up, docker_rm_force, docker_stop},
    errors::ComposeRunnerError,
    lifecycle::stop::teardown_network,
    project::ComposeProject,
};

/// Bring the network containers up, recovering once from stale containers.
///
/// A failed `up` is answered with exactly one forced cleanup and retry,
/// regardless of the failure cause; a second failure propagates.
pub async fn bring_up_network(project: &ComposeProject) -> Result<(), ComposeRunnerError> {
    info!(
        compose_file = %project.compose_file().display(),
        "bringing up the network containers"
    );

    match compose_up(project.compose_file(), project.project_dir()).await {
        Ok(()) => Ok(()),
        Err(err) => {
            warn!(error = %err, "compose up failed; removing stale containers and retrying");
            recover_stale_containers(project).await?;
            compose_up(project.compose_file(), project.project_dir())
                .await
                .map_err(Into::into)
        }
    }
}

/// Force-stop and remove every container named in the compose manifest,
/// then run a full teardown so the retry starts from a clean slate.
async fn recover_stale_containers(project: &ComposeProject) -> Result<(), ComposeRunnerError> {
    let names = project.manifest()?.container_names();

    if names.is_empty() {
        debug!("compose manifest names no containers; skipping forced removal");
    } else {
        // Stop fails for containers that are not running; removal is forced
        // anyway, so both outcomes only get logged.
        if let Err(err) = docker_stop(&names).await {
            debug!(error = %err, "docker stop during recovery");
        }
        if let Err(err) = docker_rm_force(&names).await {
            debug!(error = %err, "docker rm during recovery");
        }
    }

    teardown_network(project).await
}
