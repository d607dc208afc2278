use std::path::PathBuf;

use localnet_env as ln_env;

/// Default host the network is reachable on.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// gRPC port of the consensus node.
pub const CONSENSUS_GRPC_PORT: u16 = 50211;

/// Account id of the single consensus node.
pub const CONSENSUS_NODE_ID: &str = "0.0.3";

/// HTTP port of the mirror node REST API.
pub const MIRROR_API_PORT: u16 = 5551;

/// Port probed for mirror node readiness after start-up.
pub const MIRROR_READINESS_PORT: u16 = 5600;

/// Default number of generated accounts per key kind.
pub const DEFAULT_ACCOUNTS_PER_KIND: u32 = 10;

/// Default compose file expected in the working directory.
pub const DEFAULT_COMPOSE_FILE: &str = "docker-compose.yml";

/// Directory the network containers write logs into, cleared on stop.
pub const DEFAULT_LOG_DIR: &str = "network-logs";

/// Resolve the compose file path, honoring `LOCALNET_COMPOSE_FILE`.
#[must_use]
pub fn compose_file() -> PathBuf {
    ln_env::localnet_compose_file().unwrap_or_else(|| PathBuf::from(DEFAULT_COMPOSE_FILE))
}

/// Resolve the network log directory, honoring `LOCALNET_LOG_DIR`.
#[must_use]
pub fn log_dir() -> PathBuf {
    ln_env::localnet_log_dir().unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR))
}
