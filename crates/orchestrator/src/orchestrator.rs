use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, error, info};
use wallet_session_types::{ChainDescriptor, Coin, TransactionReceipt, TransferRecord};
use wallet_session_provider::{
    ClientConnector, ClientError, ProviderError, WalletProvider,
};

use crate::balance::BalanceReader;
use crate::inspector::TransactionInspector;
use crate::notice::{Notice, Notices};
use crate::session::{Session, SessionHandle, SigningSession};
use crate::transfer::{SendOutcome, TransferExecutor};

/// Errors surfaced by the connect handshake.
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("no wallet capability reachable, install or enable a wallet extension")]
    ProviderUnavailable,

    #[error("no chain selected")]
    NoChainSelected,

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("signer exposed no accounts for {chain_id}")]
    NoAccounts { chain_id: String },

    #[error("client binding failed: {0}")]
    Client(#[from] ClientError),
}

/// Result of a connect invocation that did not fail.
#[derive(Debug, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// Session established for the requested chain.
    Connected { address: String },

    /// A handshake for the same descriptor was already in flight; this call
    /// was a no-op.
    AlreadyConnecting,

    /// The attempt resolved after a later selection replaced it; its result
    /// was discarded.
    Superseded,
}

/// Top-level state machine coordinating wallet, client and the session
/// components. Sole writer of the shared session.
pub struct SessionOrchestrator {
    provider: Arc<dyn WalletProvider>,
    connector: Arc<dyn ClientConnector>,
    session: SessionHandle,
    descriptor: RwLock<Option<ChainDescriptor>>,
    attempt: AtomicU64,
    notices: Notices,
    balance: BalanceReader,
    transfers: TransferExecutor,
    inspector: TransactionInspector,
}

impl SessionOrchestrator {
    pub fn new(provider: Arc<dyn WalletProvider>, connector: Arc<dyn ClientConnector>) -> Self {
        let session = SessionHandle::new();
        let notices = Notices::new(32);
        let record = Arc::new(RwLock::new(TransferRecord::default()));

        let balance = BalanceReader::new(session.clone(), notices.clone());
        let transfers = TransferExecutor::new(session.clone(), record.clone(), notices.clone());
        let inspector = TransactionInspector::new(session.clone(), record);

        Self {
            provider,
            connector,
            session,
            descriptor: RwLock::new(None),
            attempt: AtomicU64::new(0),
            notices,
            balance,
            transfers,
            inspector,
        }
    }

    /// Read handle over the session for dependents.
    pub fn session(&self) -> SessionHandle {
        self.session.clone()
    }

    /// Subscribe to user-facing notices.
    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.notices.subscribe()
    }

    pub fn balance_reader(&self) -> &BalanceReader {
        &self.balance
    }

    pub fn transfer_executor(&self) -> &TransferExecutor {
        &self.transfers
    }

    pub fn transaction_inspector(&self) -> &TransactionInspector {
        &self.inspector
    }

    /// Currently selected chain descriptor.
    pub async fn selected_chain(&self) -> Option<ChainDescriptor> {
        self.descriptor.read().await.clone()
    }

    /// Select a chain and (re)establish the session for it.
    ///
    /// This is the path taken on the initial selection and on every network
    /// change; a selection made while a handshake is in flight supersedes it.
    pub async fn select_chain(
        &self,
        descriptor: ChainDescriptor,
    ) -> Result<ConnectOutcome, ConnectError> {
        *self.descriptor.write().await = Some(descriptor.clone());
        self.connect(descriptor).await
    }

    /// Manual connect/reconnect with the currently selected descriptor.
    pub async fn reconnect(&self) -> Result<ConnectOutcome, ConnectError> {
        let descriptor = self
            .descriptor
            .read()
            .await
            .clone()
            .ok_or(ConnectError::NoChainSelected)?;
        self.connect(descriptor).await
    }

    async fn connect(&self, descriptor: ChainDescriptor) -> Result<ConnectOutcome, ConnectError> {
        if !self.provider.is_available().await {
            error!("wallet provider unreachable");
            self.notices.emit(Notice::ProviderMissing);
            return Err(ConnectError::ProviderUnavailable);
        }

        // Claim this attempt under the write lock. A duplicate handshake for
        // the chain id already being connected is a no-op; anything else
        // supersedes whatever was in flight.
        let attempt = {
            let mut state = self.session.write().await;
            if state.is_connecting_to(&descriptor.chain_id) {
                debug!(chain_id = %descriptor.chain_id, "connect already in flight");
                return Ok(ConnectOutcome::AlreadyConnecting);
            }
            let attempt = self.attempt.fetch_add(1, Ordering::SeqCst) + 1;
            *state = Session::Connecting {
                chain_id: descriptor.chain_id.clone(),
                attempt,
            };
            attempt
        };

        info!(chain_id = %descriptor.chain_id, "connecting");
        match self.handshake(&descriptor).await {
            Ok(session) => self.publish(attempt, &descriptor, session).await,
            Err(err) => self.abandon(attempt, &descriptor.chain_id, err).await,
        }
    }

    /// The five handshake steps, strictly in order. Partial handles from a
    /// failed step are dropped here and never published.
    async fn handshake(
        &self,
        descriptor: &ChainDescriptor,
    ) -> Result<SigningSession, ConnectError> {
        self.provider.suggest_chain(descriptor).await?;
        self.provider.enable(&descriptor.chain_id).await?;

        let signer = self.provider.offline_signer(&descriptor.chain_id).await?;
        let accounts = signer.accounts().await?;
        let account = accounts
            .into_iter()
            .next()
            .ok_or_else(|| ConnectError::NoAccounts {
                chain_id: descriptor.chain_id.clone(),
            })?;

        let client = self
            .connector
            .connect_with_signer(&descriptor.rpc_endpoint, signer)
            .await?;

        Ok(SigningSession {
            address: account.address,
            client,
        })
    }

    async fn publish(
        &self,
        attempt: u64,
        descriptor: &ChainDescriptor,
        session: SigningSession,
    ) -> Result<ConnectOutcome, ConnectError> {
        {
            let mut state = self.session.write().await;
            match &*state {
                Session::Connecting {
                    attempt: current, ..
                } if *current == attempt => {
                    // Address and client land together; no observer ever
                    // sees one without the other.
                    *state = Session::Active(session.clone());
                }
                _ => {
                    info!(
                        chain_id = %descriptor.chain_id,
                        "discarding superseded connect result"
                    );
                    return Ok(ConnectOutcome::Superseded);
                }
            }
        }

        info!(
            chain_id = %descriptor.chain_id,
            address = %session.address,
            "session established"
        );
        self.notices.emit(Notice::Connected {
            chain_id: descriptor.chain_id.clone(),
            address: session.address.clone(),
        });

        // A fresh session means a fresh balance.
        self.balance
            .refresh(&descriptor.stake_currency.coin_minimal_denom)
            .await;

        Ok(ConnectOutcome::Connected {
            address: session.address,
        })
    }

    async fn abandon(
        &self,
        attempt: u64,
        chain_id: &str,
        err: ConnectError,
    ) -> Result<ConnectOutcome, ConnectError> {
        let superseded = {
            let mut state = self.session.write().await;
            match &*state {
                Session::Connecting {
                    attempt: current, ..
                } if *current == attempt => {
                    *state = Session::Disconnected;
                    false
                }
                _ => true,
            }
        };

        if superseded {
            debug!(chain_id, error = %err, "superseded connect attempt failed, discarding");
            return Ok(ConnectOutcome::Superseded);
        }

        error!(chain_id, error = %err, "connect failed");
        self.notices.emit(Notice::ConnectFailed {
            chain_id: chain_id.to_string(),
            reason: err.to_string(),
        });
        Err(err)
    }

    /// Re-query the stake-currency balance for the active session.
    pub async fn refresh_balance(&self) -> Option<Coin> {
        let Some(descriptor) = self.selected_chain().await else {
            return self.balance.current().await;
        };
        self.balance
            .refresh(&descriptor.stake_currency.coin_minimal_denom)
            .await
    }

    /// Last published balance without issuing a query.
    pub async fn current_balance(&self) -> Option<Coin> {
        self.balance.current().await
    }

    /// Submit the fixed-amount transfer to `recipient`, then re-query the
    /// balance if the transfer was delivered.
    pub async fn send(&self, recipient: &str) -> SendOutcome {
        let Some(descriptor) = self.selected_chain().await else {
            debug!("no chain selected, transfer skipped");
            return SendOutcome::NotAttempted;
        };

        let outcome = self.transfers.send(recipient, &descriptor).await;
        if outcome.is_success() {
            // The balance changed on-chain; never subtract locally.
            self.balance
                .refresh(&descriptor.stake_currency.coin_minimal_denom)
                .await;
        }
        outcome
    }

    /// Resolve the recorded transfer hash into a receipt.
    pub async fn lookup_transfer(&self) -> Option<TransactionReceipt> {
        self.inspector.lookup().await
    }

    /// Resolve an explicit hash into a receipt.
    pub async fn lookup_hash(&self, hash: &str) -> Option<TransactionReceipt> {
        self.inspector.lookup_hash(hash).await
    }

    /// State of the most recent transfer.
    pub async fn transfer_record(&self) -> TransferRecord {
        self.transfers.record().await
    }
}
