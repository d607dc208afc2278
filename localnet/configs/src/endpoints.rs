use crate::constants::{
    CONSENSUS_GRPC_PORT, CONSENSUS_NODE_ID, DEFAULT_HOST, MIRROR_API_PORT, MIRROR_READINESS_PORT,
};

/// Addresses of the fixed network services for a given host.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NetworkEndpoints {
    host: String,
}

impl NetworkEndpoints {
    /// Build endpoints for a host override; empty or absent falls back to
    /// `LOCALNET_HOST`, then to the loopback default.
    #[must_use]
    pub fn for_host(host: Option<&str>) -> Self {
        let host = host
            .map(str::to_owned)
            .filter(|h| !h.is_empty())
            .or_else(localnet_env::localnet_host)
            .unwrap_or_else(|| DEFAULT_HOST.to_owned());
        Self { host }
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// gRPC address of the consensus node.
    #[must_use]
    pub fn consensus_grpc(&self) -> String {
        format!("{}:{CONSENSUS_GRPC_PORT}", self.host)
    }

    /// Account id of the consensus node.
    #[must_use]
    pub const fn node_id(&self) -> &'static str {
        CONSENSUS_NODE_ID
    }

    /// Base URL of the mirror node REST API.
    #[must_use]
    pub fn mirror_api_base(&self) -> String {
        format!("http://{}:{MIRROR_API_PORT}", self.host)
    }

    /// Port probed until the mirror node answers HTTP.
    #[must_use]
    pub const fn mirror_readiness_port(&self) -> u16 {
        MIRROR_READINESS_PORT
    }
}

impl Default for NetworkEndpoints {
    fn default() -> Self {
        Self::for_host(None)
    }
}

#[cfg(test)]
mod tests {
    use super::NetworkEndpoints;

    #[test]
    fn empty_host_falls_back_to_loopback() {
        let endpoints = NetworkEndpoints::for_host(Some(""));
        assert_eq!(endpoints.host(), "127.0.0.1");
        assert_eq!(endpoints.consensus_grpc(), "127.0.0.1:50211");
        assert_eq!(endpoints.mirror_api_base(), "http://127.0.0.1:5551");
    }

    #[test]
    fn host_override_is_used_verbatim() {
        let endpoints = NetworkEndpoints::for_host(Some("10.0.0.5"));
        assert_eq!(endpoints.consensus_grpc(), "10.0.0.5:50211");
        assert_eq!(endpoints.mirror_api_base(), "http://10.0.0.5:5551");
        assert_eq!(endpoints.node_id(), "0.0.3");
    }
}
