use std::time::Duration;

use reqwest::Client as ReqwestClient;
use thiserror::Error;
use tokio::time::{sleep, timeout};
use tracing::{debug, info};

/// Path queried on the mirror node REST API to decide readiness.
const READINESS_PATH: &str = "/api/v1/transactions";

/// Error raised when the mirror node HTTP readiness check times out.
#[derive(Clone, Copy, Debug, Error)]
#[error("timeout waiting for mirror node HTTP endpoint on port {port} after {timeout:?}")]
pub struct MirrorReadinessError {
    port: u16,
    timeout: Duration,
}

impl MirrorReadinessError {
    #[must_use]
    pub const fn new(port: u16, timeout: Duration) -> Self {
        Self { port, timeout }
    }

    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Wait until the mirror node answers HTTP success on `host:port`.
pub async fn wait_for_mirror_node(
    host: &str,
    port: u16,
    timeout_duration: Duration,
    poll_interval: Duration,
) -> Result<(), MirrorReadinessError> {
    let url = format!("http://{host}:{port}{READINESS_PATH}");

    info!(
        %url,
        timeout_secs = timeout_duration.as_secs_f32(),
        poll_ms = poll_interval.as_millis(),
        "waiting for mirror node HTTP readiness"
    );

    let client = ReqwestClient::new();
    let probe = async {
        loop {
            let is_ready = client
                .get(&url)
                .send()
                .await
                .map(|response| response.status().is_success())
                .unwrap_or(false);

            if is_ready {
                debug!(%url, "mirror node endpoint is ready");
                return;
            }

            sleep(poll_interval).await;
        }
    };

    timeout(timeout_duration, probe)
        .await
        .map_err(|_| MirrorReadinessError::new(port, timeout_duration))
}
