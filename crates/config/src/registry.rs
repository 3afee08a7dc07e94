use serde::{Deserialize, Serialize};
use wallet_session_types::{ChainDescriptor, Currency};

use crate::{validate_registry, ConfigError, Result};

/// Ordered set of selectable chain descriptors.
///
/// The first entry is the default selection offered to the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChainRegistry {
    pub chains: Vec<ChainDescriptor>,
}

impl ChainRegistry {
    /// Build a registry, validating every descriptor.
    pub fn new(chains: Vec<ChainDescriptor>) -> Result<Self> {
        let registry = Self { chains };
        validate_registry(&registry)?;
        Ok(registry)
    }

    /// The networks offered out of the box.
    pub fn builtin() -> Self {
        Self {
            chains: vec![osmosis(), localnet()],
        }
    }

    pub fn get(&self, chain_id: &str) -> Option<&ChainDescriptor> {
        self.chains.iter().find(|c| c.chain_id == chain_id)
    }

    /// Like [`get`](Self::get) but with a typed error for selection flows.
    pub fn require(&self, chain_id: &str) -> Result<&ChainDescriptor> {
        self.get(chain_id)
            .ok_or_else(|| ConfigError::UnknownChain(chain_id.to_string()))
    }

    pub fn default_chain(&self) -> Option<&ChainDescriptor> {
        self.chains.first()
    }

    pub fn chain_ids(&self) -> Vec<&str> {
        self.chains.iter().map(|c| c.chain_id.as_str()).collect()
    }
}

impl Default for ChainRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Osmosis mainnet parameters.
pub fn osmosis() -> ChainDescriptor {
    ChainDescriptor {
        chain_id: "osmosis-1".to_string(),
        pretty_name: "Osmosis".to_string(),
        rpc_endpoint: "https://rpc.osmosis.zone".to_string(),
        stake_currency: Currency::new("OSMO", "uosmo", 6),
        fee_currencies: vec![Currency::new("OSMO", "uosmo", 6)],
    }
}

/// Local single-node development chain.
pub fn localnet() -> ChainDescriptor {
    ChainDescriptor {
        chain_id: "spx-local-1".to_string(),
        pretty_name: "SPX Localnet".to_string(),
        rpc_endpoint: "http://localhost:26657".to_string(),
        stake_currency: Currency::new("SPX", "uspx", 6),
        fee_currencies: vec![Currency::new("SPX", "uspx", 6)],
    }
}
