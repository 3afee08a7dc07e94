use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use wallet_session_types::ChainDescriptor;

/// Account exposed by an offline signing handle
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub address: String,
}

impl AccountInfo {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

/// Browser-resident wallet capability acting as custodian of keys.
///
/// The orchestrator receives this as an injected dependency so tests can
/// substitute a mock.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Whether the wallet capability is reachable at all.
    async fn is_available(&self) -> bool {
        true
    }

    /// Register a chain with the wallet. Registering an already-known
    /// chain id must succeed.
    async fn suggest_chain(&self, descriptor: &ChainDescriptor) -> Result<(), ProviderError>;

    /// Request authorization for the given chain id.
    async fn enable(&self, chain_id: &str) -> Result<(), ProviderError>;

    /// Obtain an offline signing handle scoped to the chain id.
    async fn offline_signer(&self, chain_id: &str)
        -> Result<Arc<dyn OfflineSigner>, ProviderError>;
}

/// Signing handle for one chain, able to enumerate its authorized accounts.
#[async_trait]
pub trait OfflineSigner: Send + Sync {
    async fn accounts(&self) -> Result<Vec<AccountInfo>, ProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("no wallet capability reachable")]
    Unavailable,

    #[error("wallet rejected chain registration for {chain_id}")]
    Rejected { chain_id: String },

    #[error("wallet authorization refused for {chain_id}")]
    NotAuthorized { chain_id: String },
}
