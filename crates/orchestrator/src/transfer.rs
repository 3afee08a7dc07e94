use cosmwasm_std::Uint128;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};
use wallet_session_types::{ChainDescriptor, Coin, Fee, TransferRecord};

use crate::notice::{Notice, Notices};
use crate::session::SessionHandle;

/// Whole stake-currency units moved by every transfer.
pub const TRANSFER_WHOLE_UNITS: u128 = 10;

/// Fee in minor units of the stake currency.
pub const FEE_AMOUNT: u128 = 5_000;

/// Gas budget per transfer.
pub const GAS_LIMIT: u64 = 200_000;

/// Outcome of one `send` invocation.
///
/// `ExecutionFailed` and `TransportFailed` are distinct shapes but both
/// non-success; neither records a hash. There is no automatic retry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum SendOutcome {
    /// A guard stopped the transfer before any network call.
    NotAttempted,

    /// Broadcast accepted and executed with code 0.
    Delivered { height: u64, hash: String },

    /// Broadcast accepted but on-chain execution returned a non-zero code.
    ExecutionFailed { code: u32, height: u64 },

    /// The broadcast itself failed at the transport layer.
    TransportFailed { reason: String },
}

impl SendOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SendOutcome::Delivered { .. })
    }
}

/// Builds, signs and broadcasts a single-denomination token transfer, then
/// classifies the delivery result.
pub struct TransferExecutor {
    session: SessionHandle,
    record: Arc<RwLock<TransferRecord>>,
    notices: Notices,
}

impl TransferExecutor {
    pub(crate) fn new(
        session: SessionHandle,
        record: Arc<RwLock<TransferRecord>>,
        notices: Notices,
    ) -> Self {
        Self {
            session,
            record,
            notices,
        }
    }

    /// State of the most recent transfer.
    pub async fn record(&self) -> TransferRecord {
        self.record.read().await.clone()
    }

    /// Transfer the fixed amount of stake currency to `recipient`.
    ///
    /// Missing session or empty recipient aborts silently before any network
    /// call. Exactly one broadcast attempt is made per invocation.
    pub async fn send(&self, recipient: &str, descriptor: &ChainDescriptor) -> SendOutcome {
        let Some(session) = self.session.snapshot().await else {
            debug!("no active session, transfer skipped");
            return SendOutcome::NotAttempted;
        };
        if recipient.trim().is_empty() {
            debug!("empty recipient, transfer skipped");
            return SendOutcome::NotAttempted;
        }

        // A new transfer discards the previous hash and receipt.
        *self.record.write().await = TransferRecord::begin(recipient);

        let stake = &descriptor.stake_currency;
        let amount = vec![Coin {
            amount: minor_units(TRANSFER_WHOLE_UNITS, stake.coin_decimals),
            denom: stake.coin_minimal_denom.clone(),
        }];
        let fee = Fee::new(
            vec![Coin::new(FEE_AMOUNT, stake.coin_minimal_denom.clone())],
            GAS_LIMIT,
        );

        let result = session
            .client
            .send_tokens(&session.address, recipient, amount, fee, "")
            .await;

        match result {
            Ok(delivered) if delivered.is_success() => {
                info!(
                    height = delivered.height,
                    hash = %delivered.transaction_hash,
                    "transfer delivered"
                );
                self.record.write().await.hash = Some(delivered.transaction_hash.clone());
                self.notices.emit(Notice::TransferDelivered {
                    height: delivered.height,
                    hash: delivered.transaction_hash.clone(),
                });
                SendOutcome::Delivered {
                    height: delivered.height,
                    hash: delivered.transaction_hash,
                }
            }
            Ok(rejected) => {
                error!(
                    code = rejected.code,
                    height = rejected.height,
                    "transfer executed with non-zero code"
                );
                SendOutcome::ExecutionFailed {
                    code: rejected.code,
                    height: rejected.height,
                }
            }
            Err(err) => {
                error!(error = %err, "transfer broadcast failed");
                SendOutcome::TransportFailed {
                    reason: err.to_string(),
                }
            }
        }
    }
}

/// Convert whole units to minor units using the currency's decimal exponent.
pub fn minor_units(whole: u128, decimals: u32) -> Uint128 {
    Uint128::new(whole) * Uint128::new(10u128.pow(decimals))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_units_exponent_six() {
        assert_eq!(minor_units(10, 6), Uint128::new(10_000_000));
    }

    #[test]
    fn test_minor_units_zero_exponent() {
        assert_eq!(minor_units(10, 0), Uint128::new(10));
    }

    #[test]
    fn test_minor_units_as_string() {
        assert_eq!(minor_units(10, 6).to_string(), "10000000");
    }
}
