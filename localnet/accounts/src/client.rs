use async_trait::async_trait;
use localnet_config::NetworkEndpoints;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Path of the account-creation endpoint on the local network gateway.
const CREATE_ACCOUNT_PATH: &str = "/api/v1/accounts";

/// Error raised by the account-creation boundary.
#[derive(Debug, Error)]
pub enum AccountServiceError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("account creation rejected: {reason}")]
    Rejected { reason: String },
}

/// One account-creation request sent across the SDK boundary.
#[derive(Clone, Debug, Serialize)]
pub struct CreateAccountRequest {
    pub key_kind: &'static str,
    pub public_key: String,
    pub initial_balance: u64,
    pub evm_alias: bool,
}

/// Account as reported back by the network.
#[derive(Clone, Debug, Deserialize)]
pub struct CreatedAccount {
    pub account_id: String,
    pub balance: u64,
}

/// Boundary to the external SDK used for creating accounts. Production
/// code talks HTTP through [`NetworkAccountClient`]; tests substitute a
/// mock.
#[async_trait]
pub trait AccountService: Send + Sync {
    async fn create_account(
        &self,
        request: CreateAccountRequest,
    ) -> Result<CreatedAccount, AccountServiceError>;
}

/// Creates accounts through the running network's local gateway API.
#[derive(Clone)]
pub struct NetworkAccountClient {
    base_url: String,
    client: ReqwestClient,
}

impl NetworkAccountClient {
    #[must_use]
    pub fn new(endpoints: &NetworkEndpoints) -> Self {
        Self {
            base_url: endpoints.mirror_api_base(),
            client: ReqwestClient::new(),
        }
    }
}

#[async_trait]
impl AccountService for NetworkAccountClient {
    async fn create_account(
        &self,
        request: CreateAccountRequest,
    ) -> Result<CreatedAccount, AccountServiceError> {
        let url = format!("{}{CREATE_ACCOUNT_PATH}", self.base_url);
        debug!(%url, key_kind = request.key_kind, "requesting account creation");

        let response = self.client.post(&url).json(&request).send().await?;
        if !response.status().is_success() {
            return Err(AccountServiceError::Rejected {
                reason: response.status().to_string(),
            });
        }

        Ok(response.json::<CreatedAccount>().await?)
    }
}
