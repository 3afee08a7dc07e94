use async_trait::async_trait;
use std::sync::Arc;
use wallet_session_types::{Coin, DeliverTxResult, Fee, TransactionReceipt};

use crate::OfflineSigner;

/// Client bound to one chain's RPC endpoint and one signing handle.
///
/// Reads (`balance`, `tx_by_hash`) and the write (`send_tokens`) all run
/// against the same authenticated binding.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Current holdings of `address` in `denom` minor units.
    async fn balance(&self, address: &str, denom: &str) -> Result<Coin, ClientError>;

    /// Build, sign and broadcast a token transfer, then wait for inclusion.
    async fn send_tokens(
        &self,
        from: &str,
        to: &str,
        amount: Vec<Coin>,
        fee: Fee,
        memo: &str,
    ) -> Result<DeliverTxResult, ClientError>;

    /// Look up a previously included transaction by hash.
    async fn tx_by_hash(&self, hash: &str) -> Result<TransactionReceipt, ClientError>;
}

/// Binds an RPC endpoint and a signing handle into a usable [`ChainClient`].
#[async_trait]
pub trait ClientConnector: Send + Sync {
    async fn connect_with_signer(
        &self,
        rpc_endpoint: &str,
        signer: Arc<dyn OfflineSigner>,
    ) -> Result<Arc<dyn ChainClient>, ClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("query failed: {0}")]
    QueryFailed(String),

    #[error("broadcast failed: {0}")]
    BroadcastFailed(String),

    #[error("transaction not found: {0}")]
    TxNotFound(String),
}
