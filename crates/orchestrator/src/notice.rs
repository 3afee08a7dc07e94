use serde::Serialize;
use tokio::sync::broadcast;

/// User-facing notices emitted by the session components.
///
/// The presentation layer subscribes and renders these; nothing in the core
/// blocks on delivery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Notice {
    /// No wallet capability reachable; the user must install or enable one
    /// before any retry can succeed.
    ProviderMissing,

    /// The connect handshake failed and the session returned to disconnected.
    ConnectFailed { chain_id: String, reason: String },

    /// A session was established.
    Connected { chain_id: String, address: String },

    /// A balance query failed; the previously shown value still stands.
    BalanceUnavailable { denom: String },

    /// A transfer was delivered on-chain.
    TransferDelivered { height: u64, hash: String },
}

impl Notice {
    /// Blocking notices require user action before the flow can continue.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Notice::ProviderMissing | Notice::ConnectFailed { .. })
    }
}

/// Fan-out channel for notices.
#[derive(Clone)]
pub struct Notices {
    tx: broadcast::Sender<Notice>,
}

impl Notices {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.tx.subscribe()
    }

    /// Best-effort send; no subscriber is fine.
    pub fn emit(&self, notice: Notice) {
        let _ = self.tx.send(notice);
    }
}
