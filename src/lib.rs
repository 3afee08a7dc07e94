//! Browser-wallet session orchestration for Cosmos SDK chains.
//!
//! The core is [`SessionOrchestrator`]: it takes a chain descriptor, runs
//! the wallet handshake against an injected [`WalletProvider`], and owns the
//! resulting signing session. Balance reads, token transfers and
//! transaction lookups all run against that session through read-only
//! handles.
//!
//! Chain parameters come from [`ChainRegistry`] tables; the wallet and the
//! node are external collaborators reached only through the capability
//! traits in `wallet_session_provider`.

pub use wallet_session_config as config;
pub use wallet_session_orchestrator as orchestrator;
pub use wallet_session_provider as provider;
pub use wallet_session_types as types;

pub use wallet_session_config::{ChainRegistry, RegistryLoader};
pub use wallet_session_orchestrator::{
    BalanceReader, ConnectError, ConnectOutcome, Notice, SendOutcome, SessionOrchestrator,
    TransactionInspector, TransferExecutor,
};
pub use wallet_session_provider::{
    ChainClient, ClientConnector, OfflineSigner, WalletProvider,
};
pub use wallet_session_types::{
    ChainDescriptor, Coin, Currency, DeliverTxResult, Fee, TransactionReceipt, TransferRecord,
};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured logging for the session components.
pub fn init_tracing() -> Result<(), TracingError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,wallet_session=debug"));

    let fmt_layer = fmt::layer().with_target(true).with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| TracingError::InitError(e.to_string()))?;

    Ok(())
}

/// Tracing error types
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("tracing initialization error: {0}")]
    InitError(String),
}
