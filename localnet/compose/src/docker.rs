use std::{process::Stdio, time::Duration};

use localnet_core::adjust_timeout;
use tokio::{process::Command, time::timeout};
use tracing::{debug, warn};

use crate::errors::ComposeRunnerError;

const DOCKER_INFO_TIMEOUT: Duration = Duration::from_secs(15);

/// Checks that `docker info` succeeds within a timeout.
pub async fn ensure_docker_available() -> Result<(), ComposeRunnerError> {
    let mut command = Command::new("docker");
    command
        .arg("info")
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    let available = timeout(adjust_timeout(DOCKER_INFO_TIMEOUT), command.status())
        .await
        .ok()
        .and_then(Result::ok)
        .map(|status| status.success())
        .unwrap_or(false);

    if available {
        debug!("docker info succeeded");
        Ok(())
    } else {
        warn!("docker info failed or timed out; network commands unavailable");
        Err(ComposeRunnerError::DockerUnavailable)
    }
}
