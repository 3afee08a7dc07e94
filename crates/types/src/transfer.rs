use cosmwasm_schema::cw_serde;

/// Node response to a broadcast transaction, once included in a block.
#[cw_serde]
pub struct DeliverTxResult {
    /// Execution code, 0 for on-chain success
    pub code: u32,

    /// Inclusion height
    pub height: u64,

    /// Hash of the broadcast transaction
    pub transaction_hash: String,
}

impl DeliverTxResult {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

/// Read-only projection of a transaction-by-hash query.
#[cw_serde]
pub struct TransactionReceipt {
    pub height: u64,
    pub gas_used: u64,
    pub gas_wanted: u64,
    pub code: u32,
}

/// State of the most recent transfer.
///
/// `hash` is set only after a successful broadcast and `receipt` only after
/// a successful lookup; starting a new transfer clears both.
#[cw_serde]
#[derive(Default)]
pub struct TransferRecord {
    /// Recipient address of the transfer
    pub recipient: String,

    /// Hash of the delivered transaction, if any
    pub hash: Option<String>,

    /// Receipt resolved from the hash, if any
    pub receipt: Option<TransactionReceipt>,
}

impl TransferRecord {
    /// Begin a fresh transfer to `recipient`, discarding prior outcome state.
    pub fn begin(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            hash: None,
            receipt: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deliver_tx_success_code() {
        let ok = DeliverTxResult {
            code: 0,
            height: 12345,
            transaction_hash: "ABCD".to_string(),
        };
        assert!(ok.is_success());

        let failed = DeliverTxResult { code: 5, ..ok };
        assert!(!failed.is_success());
    }

    #[test]
    fn test_begin_clears_outcome() {
        let mut record = TransferRecord::begin("osmo1r9u");
        record.hash = Some("ABCD".to_string());
        record.receipt = Some(TransactionReceipt {
            height: 12345,
            gas_used: 80_000,
            gas_wanted: 200_000,
            code: 0,
        });

        let fresh = TransferRecord::begin("osmo1other");
        assert_eq!(fresh.recipient, "osmo1other");
        assert!(fresh.hash.is_none());
        assert!(fresh.receipt.is_none());
    }
}
