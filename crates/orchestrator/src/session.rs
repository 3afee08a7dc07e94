use std::sync::Arc;
use tokio::sync::RwLock;
use wallet_session_provider::ChainClient;

/// Authenticated binding between a user account and a client able to read
/// and write that chain.
#[derive(Clone)]
pub struct SigningSession {
    /// Address of the selected account
    pub address: String,

    /// Client bound to the chain's RPC endpoint and the account's signer
    pub client: Arc<dyn ChainClient>,
}

impl std::fmt::Debug for SigningSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningSession")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

/// Connection state. Address and client only ever appear together inside
/// `Active`, so a half-populated session is unrepresentable.
#[derive(Clone, Debug, Default)]
pub enum Session {
    #[default]
    Disconnected,

    /// A handshake is in flight. `attempt` identifies it so a superseded
    /// handshake can be recognized and discarded when it resolves.
    Connecting { chain_id: String, attempt: u64 },

    Active(SigningSession),
}

impl Session {
    pub fn active(&self) -> Option<&SigningSession> {
        match self {
            Session::Active(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_connecting_to(&self, chain_id: &str) -> bool {
        matches!(self, Session::Connecting { chain_id: current, .. } if current == chain_id)
    }
}

/// Shared handle over the orchestrator-owned session.
///
/// Only this crate can write through it; everything else takes snapshots.
/// Snapshots are consistent: address and client are published together.
#[derive(Clone)]
pub struct SessionHandle {
    inner: Arc<RwLock<Session>>,
}

impl SessionHandle {
    pub(crate) fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Session::Disconnected)),
        }
    }

    /// Clone of the active session, if any.
    pub async fn snapshot(&self) -> Option<SigningSession> {
        self.inner.read().await.active().cloned()
    }

    /// Clone of the full connection state.
    pub async fn state(&self) -> Session {
        self.inner.read().await.clone()
    }

    pub(crate) async fn write(&self) -> tokio::sync::RwLockWriteGuard<'_, Session> {
        self.inner.write().await
    }
}
