use std::{env, path::PathBuf};

#[must_use]
pub fn slow_test_env() -> bool {
    env::var("SLOW_TEST_ENV").is_ok_and(|s| s == "true")
}

#[must_use]
pub fn localnet_host() -> Option<String> {
    env::var("LOCALNET_HOST").ok().filter(|s| !s.is_empty())
}

#[must_use]
pub fn localnet_compose_file() -> Option<PathBuf> {
    env::var("LOCALNET_COMPOSE_FILE").ok().map(PathBuf::from)
}

#[must_use]
pub fn localnet_log_dir() -> Option<PathBuf> {
    env::var("LOCALNET_LOG_DIR").ok().map(PathBuf::from)
}

#[must_use]
pub fn localnet_readiness_timeout_secs() -> Option<u64> {
    env::var("LOCALNET_READINESS_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
}

#[must_use]
pub fn localnet_poll_interval_millis() -> Option<u64> {
    env::var("LOCALNET_POLL_INTERVAL_MILLIS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
}

#[must_use]
pub fn localnet_keep_logs() -> bool {
    env::var("LOCALNET_KEEP_LOGS").is_ok()
}
