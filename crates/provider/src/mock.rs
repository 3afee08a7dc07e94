//! Scriptable in-memory implementations of the wallet and client capabilities.
//!
//! These stand in for the browser extension and the remote node in tests;
//! they record calls so tests can assert on ordering and guard behavior.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{Notify, RwLock};
use wallet_session_types::{
    ChainDescriptor, Coin, DeliverTxResult, Fee, TransactionReceipt,
};

use crate::{
    AccountInfo, ChainClient, ClientConnector, ClientError, OfflineSigner, ProviderError,
    WalletProvider,
};

/// Mock wallet capability with scriptable availability and refusals.
pub struct MockWalletProvider {
    available: RwLock<bool>,
    suggested: RwLock<Vec<String>>,
    rejected_chains: RwLock<HashSet<String>>,
    unauthorized_chains: RwLock<HashSet<String>>,
    signer: Arc<MockOfflineSigner>,
}

impl MockWalletProvider {
    pub fn new(accounts: Vec<AccountInfo>) -> Self {
        Self {
            available: RwLock::new(true),
            suggested: RwLock::new(Vec::new()),
            rejected_chains: RwLock::new(HashSet::new()),
            unauthorized_chains: RwLock::new(HashSet::new()),
            signer: Arc::new(MockOfflineSigner::new(accounts)),
        }
    }

    /// Provider exposing a single authorized account.
    pub fn with_address(address: impl Into<String>) -> Self {
        Self::new(vec![AccountInfo::new(address)])
    }

    pub async fn set_available(&self, available: bool) {
        *self.available.write().await = available;
    }

    /// Make `suggest_chain` fail for this chain id.
    pub async fn reject_chain(&self, chain_id: impl Into<String>) {
        self.rejected_chains.write().await.insert(chain_id.into());
    }

    /// Make `enable` fail for this chain id.
    pub async fn refuse_authorization(&self, chain_id: impl Into<String>) {
        self.unauthorized_chains
            .write()
            .await
            .insert(chain_id.into());
    }

    /// Every chain id passed to `suggest_chain`, in call order.
    pub async fn suggested_chains(&self) -> Vec<String> {
        self.suggested.read().await.clone()
    }
}

#[async_trait]
impl WalletProvider for MockWalletProvider {
    async fn is_available(&self) -> bool {
        *self.available.read().await
    }

    async fn suggest_chain(&self, descriptor: &ChainDescriptor) -> Result<(), ProviderError> {
        if self
            .rejected_chains
            .read()
            .await
            .contains(&descriptor.chain_id)
        {
            return Err(ProviderError::Rejected {
                chain_id: descriptor.chain_id.clone(),
            });
        }
        // Repeated registration of a known chain succeeds; every call is
        // recorded so tests can observe the repeats.
        self.suggested.write().await.push(descriptor.chain_id.clone());
        Ok(())
    }

    async fn enable(&self, chain_id: &str) -> Result<(), ProviderError> {
        if self.unauthorized_chains.read().await.contains(chain_id) {
            return Err(ProviderError::NotAuthorized {
                chain_id: chain_id.to_string(),
            });
        }
        Ok(())
    }

    async fn offline_signer(
        &self,
        _chain_id: &str,
    ) -> Result<Arc<dyn OfflineSigner>, ProviderError> {
        Ok(self.signer.clone())
    }
}

/// Mock signing handle over a fixed account list.
pub struct MockOfflineSigner {
    accounts: RwLock<Vec<AccountInfo>>,
}

impl MockOfflineSigner {
    pub fn new(accounts: Vec<AccountInfo>) -> Self {
        Self {
            accounts: RwLock::new(accounts),
        }
    }
}

#[async_trait]
impl OfflineSigner for MockOfflineSigner {
    async fn accounts(&self) -> Result<Vec<AccountInfo>, ProviderError> {
        Ok(self.accounts.read().await.clone())
    }
}

/// One recorded call to `send_tokens`.
#[derive(Clone, Debug)]
pub struct SentTransfer {
    pub from: String,
    pub to: String,
    pub amount: Vec<Coin>,
    pub fee: Fee,
    pub memo: String,
}

/// Mock chain client with scriptable query and broadcast results.
pub struct MockChainClient {
    balances: RwLock<HashMap<String, u128>>,
    fail_balance: RwLock<bool>,
    balance_queries: AtomicUsize,
    deliver_result: RwLock<DeliverTxResult>,
    fail_broadcast: RwLock<bool>,
    sent: RwLock<Vec<SentTransfer>>,
    receipts: RwLock<HashMap<String, TransactionReceipt>>,
    tx_queries: AtomicUsize,
}

impl MockChainClient {
    pub fn new() -> Self {
        Self {
            balances: RwLock::new(HashMap::new()),
            fail_balance: RwLock::new(false),
            balance_queries: AtomicUsize::new(0),
            deliver_result: RwLock::new(DeliverTxResult {
                code: 0,
                height: 1,
                transaction_hash: "MOCKHASH".to_string(),
            }),
            fail_broadcast: RwLock::new(false),
            sent: RwLock::new(Vec::new()),
            receipts: RwLock::new(HashMap::new()),
            tx_queries: AtomicUsize::new(0),
        }
    }

    pub async fn set_balance(&self, denom: impl Into<String>, amount: u128) {
        self.balances.write().await.insert(denom.into(), amount);
    }

    pub async fn set_fail_balance(&self, fail: bool) {
        *self.fail_balance.write().await = fail;
    }

    pub async fn set_deliver_result(&self, result: DeliverTxResult) {
        *self.deliver_result.write().await = result;
    }

    pub async fn set_fail_broadcast(&self, fail: bool) {
        *self.fail_broadcast.write().await = fail;
    }

    pub async fn set_receipt(&self, hash: impl Into<String>, receipt: TransactionReceipt) {
        self.receipts.write().await.insert(hash.into(), receipt);
    }

    pub async fn sent_transfers(&self) -> Vec<SentTransfer> {
        self.sent.read().await.clone()
    }

    pub fn balance_query_count(&self) -> usize {
        self.balance_queries.load(Ordering::SeqCst)
    }

    pub fn tx_query_count(&self) -> usize {
        self.tx_queries.load(Ordering::SeqCst)
    }
}

impl Default for MockChainClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChainClient for MockChainClient {
    async fn balance(&self, _address: &str, denom: &str) -> Result<Coin, ClientError> {
        self.balance_queries.fetch_add(1, Ordering::SeqCst);
        if *self.fail_balance.read().await {
            return Err(ClientError::QueryFailed("simulated outage".to_string()));
        }
        let amount = self
            .balances
            .read()
            .await
            .get(denom)
            .copied()
            .unwrap_or_default();
        Ok(Coin::new(amount, denom))
    }

    async fn send_tokens(
        &self,
        from: &str,
        to: &str,
        amount: Vec<Coin>,
        fee: Fee,
        memo: &str,
    ) -> Result<DeliverTxResult, ClientError> {
        self.sent.write().await.push(SentTransfer {
            from: from.to_string(),
            to: to.to_string(),
            amount,
            fee,
            memo: memo.to_string(),
        });
        if *self.fail_broadcast.read().await {
            return Err(ClientError::BroadcastFailed(
                "simulated broadcast failure".to_string(),
            ));
        }
        Ok(self.deliver_result.read().await.clone())
    }

    async fn tx_by_hash(&self, hash: &str) -> Result<TransactionReceipt, ClientError> {
        self.tx_queries.fetch_add(1, Ordering::SeqCst);
        self.receipts
            .read()
            .await
            .get(hash)
            .cloned()
            .ok_or_else(|| ClientError::TxNotFound(hash.to_string()))
    }
}

/// Mock connector returning a shared [`MockChainClient`].
///
/// Endpoints can be gated so a test controls when an in-flight connect
/// resolves, or refused so the binding step fails.
pub struct MockConnector {
    client: Arc<MockChainClient>,
    routes: RwLock<HashMap<String, Arc<MockChainClient>>>,
    gates: RwLock<HashMap<String, Arc<Notify>>>,
    refused: RwLock<HashSet<String>>,
}

impl MockConnector {
    pub fn new(client: Arc<MockChainClient>) -> Self {
        Self {
            client,
            routes: RwLock::new(HashMap::new()),
            gates: RwLock::new(HashMap::new()),
            refused: RwLock::new(HashSet::new()),
        }
    }

    /// Serve a dedicated client for one endpoint instead of the default.
    pub async fn route_endpoint(
        &self,
        rpc_endpoint: impl Into<String>,
        client: Arc<MockChainClient>,
    ) {
        self.routes.write().await.insert(rpc_endpoint.into(), client);
    }

    /// Hold connections to `rpc_endpoint` until the returned handle is notified.
    pub async fn gate_endpoint(&self, rpc_endpoint: impl Into<String>) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates
            .write()
            .await
            .insert(rpc_endpoint.into(), gate.clone());
        gate
    }

    /// Make connections to `rpc_endpoint` fail.
    pub async fn refuse_endpoint(&self, rpc_endpoint: impl Into<String>) {
        self.refused.write().await.insert(rpc_endpoint.into());
    }
}

#[async_trait]
impl ClientConnector for MockConnector {
    async fn connect_with_signer(
        &self,
        rpc_endpoint: &str,
        _signer: Arc<dyn OfflineSigner>,
    ) -> Result<Arc<dyn ChainClient>, ClientError> {
        let gate = self.gates.read().await.get(rpc_endpoint).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if self.refused.read().await.contains(rpc_endpoint) {
            return Err(ClientError::ConnectionFailed(format!(
                "refused endpoint {rpc_endpoint}"
            )));
        }
        let routed = self.routes.read().await.get(rpc_endpoint).cloned();
        Ok(routed.unwrap_or_else(|| self.client.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wallet_session_types::Currency;

    fn descriptor(chain_id: &str) -> ChainDescriptor {
        ChainDescriptor {
            chain_id: chain_id.to_string(),
            pretty_name: "Test".to_string(),
            rpc_endpoint: "http://localhost:26657".to_string(),
            stake_currency: Currency::new("OSMO", "uosmo", 6),
            fee_currencies: vec![Currency::new("OSMO", "uosmo", 6)],
        }
    }

    #[tokio::test]
    async fn test_repeated_suggest_chain_is_idempotent() {
        let provider = MockWalletProvider::with_address("osmo1abc");
        let desc = descriptor("osmosis-1");

        provider.suggest_chain(&desc).await.unwrap();
        provider.suggest_chain(&desc).await.unwrap();

        assert_eq!(
            provider.suggested_chains().await,
            vec!["osmosis-1", "osmosis-1"]
        );
    }

    #[tokio::test]
    async fn test_unknown_denom_balance_is_zero() {
        let client = MockChainClient::new();
        let coin = client.balance("osmo1abc", "uosmo").await.unwrap();
        assert_eq!(coin, Coin::new(0, "uosmo"));
        assert_eq!(client.balance_query_count(), 1);
    }

    #[tokio::test]
    async fn test_refused_endpoint_fails_connect() {
        let client = Arc::new(MockChainClient::new());
        let connector = MockConnector::new(client);
        connector.refuse_endpoint("http://down:26657").await;

        let signer: Arc<dyn OfflineSigner> = Arc::new(MockOfflineSigner::new(vec![]));
        let result = connector
            .connect_with_signer("http://down:26657", signer)
            .await;
        assert!(matches!(result, Err(ClientError::ConnectionFailed(_))));
    }
}
