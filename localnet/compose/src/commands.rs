use std::{path::Path, process::Stdio, time::Duration};

use localnet_config::timeouts;
use localnet_core::adjust_timeout;
use thiserror::Error;
use tokio::{process::Command, time::timeout};
use tracing::debug;

/// Error raised while running an orchestrator command.
#[derive(Debug, Error)]
pub enum ComposeCommandError {
    #[error("spawning `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{command}` did not finish within {timeout:?}")]
    Timeout { command: String, timeout: Duration },
    #[error("`{command}` exited with {status}")]
    Failed {
        command: String,
        status: std::process::ExitStatus,
    },
}

/// Run a docker command with output discarded, failing on a non-zero exit.
pub async fn run_docker_command(
    mut command: Command,
    timeout_duration: Duration,
    description: &str,
) -> Result<(), ComposeCommandError> {
    command.stdout(Stdio::null()).stderr(Stdio::null());

    debug!(command = description, timeout = ?timeout_duration, "running docker command");
    let status = timeout(timeout_duration, command.status())
        .await
        .map_err(|_| ComposeCommandError::Timeout {
            command: description.to_owned(),
            timeout: timeout_duration,
        })?
        .map_err(|source| ComposeCommandError::Spawn {
            command: description.to_owned(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(ComposeCommandError::Failed {
            command: description.to_owned(),
            status,
        })
    }
}

/// Bring the compose services up in detached mode.
pub async fn compose_up(compose_file: &Path, project_dir: &Path) -> Result<(), ComposeCommandError> {
    let mut command = Command::new("docker");
    command
        .arg("compose")
        .arg("-f")
        .arg(compose_file)
        .arg("up")
        .arg("-d")
        .current_dir(project_dir);

    run_docker_command(
        command,
        adjust_timeout(timeouts::compose_up_timeout()),
        "docker compose up",
    )
    .await
}

/// Tear the compose services down, removing their volumes.
pub async fn compose_down(
    compose_file: &Path,
    project_dir: &Path,
) -> Result<(), ComposeCommandError> {
    let mut command = Command::new("docker");
    command
        .arg("compose")
        .arg("-f")
        .arg(compose_file)
        .arg("down")
        .arg("-v")
        .current_dir(project_dir);

    run_docker_command(
        command,
        adjust_timeout(timeouts::compose_down_timeout()),
        "docker compose down",
    )
    .await
}

/// Stop the named containers.
pub async fn docker_stop(names: &[String]) -> Result<(), ComposeCommandError> {
    let mut command = Command::new("docker");
    command.arg("stop").args(names);

    run_docker_command(
        command,
        adjust_timeout(timeouts::docker_command_timeout()),
        "docker stop",
    )
    .await
}

/// Force-remove the named containers together with their volumes.
pub async fn docker_rm_force(names: &[String]) -> Result<(), ComposeCommandError> {
    let mut command = Command::new("docker");
    command.arg("rm").arg("-f").arg("-v").args(names);

    run_docker_command(
        command,
        adjust_timeout(timeouts::docker_command_timeout()),
        "docker rm",
    )
    .await
}

/// Prune networks left behind by removed containers.
pub async fn docker_network_prune() -> Result<(), ComposeCommandError> {
    let mut command = Command::new("docker");
    command.arg("network").arg("prune").arg("-f");

    run_docker_command(
        command,
        adjust_timeout(timeouts::docker_command_timeout()),
        "docker network prune",
    )
    .await
}
