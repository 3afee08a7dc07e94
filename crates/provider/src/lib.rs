pub mod client;
pub mod mock;
pub mod wallet;

pub use client::{ChainClient, ClientConnector, ClientError};
pub use wallet::{AccountInfo, OfflineSigner, ProviderError, WalletProvider};
