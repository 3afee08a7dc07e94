use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use wallet_session_types::{TransactionReceipt, TransferRecord};

use crate::session::SessionHandle;

/// Resolves a recorded transfer hash into a transaction receipt.
///
/// All failures are swallowed here: lookups never disturb the session or a
/// previously published receipt, they only show up in the logs.
pub struct TransactionInspector {
    session: SessionHandle,
    record: Arc<RwLock<TransferRecord>>,
}

impl TransactionInspector {
    pub(crate) fn new(session: SessionHandle, record: Arc<RwLock<TransferRecord>>) -> Self {
        Self { session, record }
    }

    /// Look up the most recently recorded transfer hash.
    ///
    /// No-op when the session is absent or no hash has been recorded yet;
    /// no query reaches the transport layer in either case.
    pub async fn lookup(&self) -> Option<TransactionReceipt> {
        let hash = self.record.read().await.hash.clone();
        let Some(hash) = hash else {
            debug!("no recorded transfer hash, lookup skipped");
            return None;
        };
        self.lookup_hash(&hash).await
    }

    /// Look up an explicit hash, publishing the receipt on success.
    pub async fn lookup_hash(&self, hash: &str) -> Option<TransactionReceipt> {
        let Some(session) = self.session.snapshot().await else {
            debug!(hash, "no active session, lookup skipped");
            return None;
        };
        if hash.trim().is_empty() {
            debug!("empty hash, lookup skipped");
            return None;
        }

        match session.client.tx_by_hash(hash).await {
            Ok(receipt) => {
                info!(
                    hash,
                    height = receipt.height,
                    gas_used = receipt.gas_used,
                    gas_wanted = receipt.gas_wanted,
                    "transaction resolved"
                );
                self.record.write().await.receipt = Some(receipt.clone());
                Some(receipt)
            }
            Err(err) => {
                warn!(hash, error = %err, "transaction lookup failed, keeping prior receipt");
                None
            }
        }
    }
}
