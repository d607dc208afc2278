use std::time::Duration;

use localnet_env as ln_env;

pub const READINESS_TIMEOUT_SECS: u64 = 240;
pub const POLL_INTERVAL_MILLIS: u64 = 1000;
pub const COMPOSE_UP_TIMEOUT_SECS: u64 = 300;
pub const COMPOSE_DOWN_TIMEOUT_SECS: u64 = 120;
pub const DOCKER_COMMAND_TIMEOUT_SECS: u64 = 60;

/// Bound on waiting for the mirror node HTTP endpoint, honoring
/// `LOCALNET_READINESS_TIMEOUT_SECS`.
#[must_use]
pub fn readiness_timeout() -> Duration {
    ln_env::localnet_readiness_timeout_secs()
        .map(Duration::from_secs)
        .unwrap_or_else(|| Duration::from_secs(READINESS_TIMEOUT_SECS))
}

/// Interval between readiness probes, honoring
/// `LOCALNET_POLL_INTERVAL_MILLIS`.
#[must_use]
pub fn poll_interval() -> Duration {
    ln_env::localnet_poll_interval_millis()
        .map(Duration::from_millis)
        .unwrap_or_else(|| Duration::from_millis(POLL_INTERVAL_MILLIS))
}

/// Bound on `docker compose up` completing.
#[must_use]
pub fn compose_up_timeout() -> Duration {
    Duration::from_secs(COMPOSE_UP_TIMEOUT_SECS)
}

/// Bound on `docker compose down` completing.
#[must_use]
pub fn compose_down_timeout() -> Duration {
    Duration::from_secs(COMPOSE_DOWN_TIMEOUT_SECS)
}

/// Bound on short docker maintenance commands (stop, rm, prune).
#[must_use]
pub fn docker_command_timeout() -> Duration {
    Duration::from_secs(DOCKER_COMMAND_TIMEOUT_SECS)
}
