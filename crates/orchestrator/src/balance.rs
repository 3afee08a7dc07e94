use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use wallet_session_types::Coin;

use crate::notice::{Notice, Notices};
use crate::session::SessionHandle;

/// Produces the current balance for the active session's account.
///
/// Balances are always fresh query results; nothing here is computed
/// client-side from prior values.
pub struct BalanceReader {
    session: SessionHandle,
    balance: Arc<RwLock<Option<Coin>>>,
    notices: Notices,
}

impl BalanceReader {
    pub(crate) fn new(session: SessionHandle, notices: Notices) -> Self {
        Self {
            session,
            balance: Arc::new(RwLock::new(None)),
            notices,
        }
    }

    /// Last published balance, if any.
    pub async fn current(&self) -> Option<Coin> {
        self.balance.read().await.clone()
    }

    /// Query the chain for the session account's holdings in `denom`.
    ///
    /// Without an active session this leaves the prior value untouched and
    /// returns it. Transport failures are non-fatal: they are logged, a
    /// non-blocking notice goes out, and the prior value stands.
    pub async fn refresh(&self, denom: &str) -> Option<Coin> {
        let Some(session) = self.session.snapshot().await else {
            debug!(denom, "no active session, balance refresh skipped");
            return self.current().await;
        };

        match session.client.balance(&session.address, denom).await {
            Ok(coin) => {
                info!(address = %session.address, balance = %coin, "balance refreshed");
                *self.balance.write().await = Some(coin.clone());
                Some(coin)
            }
            Err(err) => {
                warn!(
                    address = %session.address,
                    denom,
                    error = %err,
                    "balance query failed, keeping previous value"
                );
                self.notices.emit(Notice::BalanceUnavailable {
                    denom: denom.to_string(),
                });
                self.current().await
            }
        }
    }
}
