//! Chain registry loading from files and environment overrides

use std::path::Path;
use tracing::info;

use crate::{validate_registry, ChainRegistry, ConfigError, Result};

/// Environment variable prefix for RPC endpoint overrides.
///
/// `WALLET_SESSION_RPC_OSMOSIS_1=http://localhost:26657` replaces the RPC
/// endpoint of chain id `osmosis-1` (non-alphanumerics map to `_`, upper
/// case).
pub const RPC_OVERRIDE_PREFIX: &str = "WALLET_SESSION_RPC_";

/// Registry loader for TOML and JSON sources.
pub struct RegistryLoader;

impl RegistryLoader {
    /// Load a registry from a file, format chosen by extension.
    pub fn from_file(path: &Path) -> Result<ChainRegistry> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| ConfigError::LoadError("No file extension found".to_string()))?;

        let content = std::fs::read_to_string(path)?;

        match extension {
            "toml" => Self::from_toml(&content),
            "json" => Self::from_json(&content),
            _ => Err(ConfigError::LoadError(format!(
                "Unsupported file extension: {extension}"
            ))),
        }
    }

    /// Load a registry from a TOML string.
    pub fn from_toml(content: &str) -> Result<ChainRegistry> {
        let registry: ChainRegistry = toml::from_str(content)?;
        validate_registry(&registry)?;
        Ok(registry)
    }

    /// Load a registry from a JSON string.
    pub fn from_json(content: &str) -> Result<ChainRegistry> {
        let registry: ChainRegistry = serde_json::from_str(content)?;
        validate_registry(&registry)?;
        Ok(registry)
    }

    /// Load from file and apply environment RPC overrides.
    pub fn from_file_with_env(path: &Path) -> Result<ChainRegistry> {
        let registry = Self::from_file(path)?;
        Self::apply_env_overrides(registry)
    }

    /// Replace RPC endpoints from `WALLET_SESSION_RPC_*` variables.
    pub fn apply_env_overrides(mut registry: ChainRegistry) -> Result<ChainRegistry> {
        for descriptor in &mut registry.chains {
            let var = rpc_override_var(&descriptor.chain_id);
            if let Ok(endpoint) = std::env::var(&var) {
                info!(
                    chain_id = %descriptor.chain_id,
                    endpoint = %endpoint,
                    "overriding RPC endpoint from environment"
                );
                descriptor.rpc_endpoint = endpoint;
            }
        }
        validate_registry(&registry)?;
        Ok(registry)
    }
}

/// Environment variable name carrying the RPC override for a chain id.
pub fn rpc_override_var(chain_id: &str) -> String {
    let suffix: String = chain_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{RPC_OVERRIDE_PREFIX}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const REGISTRY_TOML: &str = r#"
        [[chains]]
        chain_id = "osmosis-1"
        pretty_name = "Osmosis"
        rpc_endpoint = "https://rpc.osmosis.zone"
        fee_currencies = [
            { coin_denom = "OSMO", coin_minimal_denom = "uosmo", coin_decimals = 6 },
        ]

        [chains.stake_currency]
        coin_denom = "OSMO"
        coin_minimal_denom = "uosmo"
        coin_decimals = 6
    "#;

    #[test]
    fn test_load_from_toml() {
        let registry = RegistryLoader::from_toml(REGISTRY_TOML).unwrap();
        assert_eq!(registry.chains.len(), 1);
        assert_eq!(registry.chains[0].chain_id, "osmosis-1");
        assert_eq!(registry.chains[0].stake_currency.coin_decimals, 6);
    }

    #[test]
    fn test_load_from_json() {
        let json = r#"
        {
          "chains": [
            {
              "chain_id": "spx-local-1",
              "pretty_name": "SPX Localnet",
              "rpc_endpoint": "http://localhost:26657",
              "stake_currency": {
                "coin_denom": "SPX",
                "coin_minimal_denom": "uspx",
                "coin_decimals": 6
              },
              "fee_currencies": [
                {
                  "coin_denom": "SPX",
                  "coin_minimal_denom": "uspx",
                  "coin_decimals": 6
                }
              ]
            }
          ]
        }
        "#;

        let registry = RegistryLoader::from_json(json).unwrap();
        assert_eq!(registry.chains[0].stake_currency.coin_minimal_denom, "uspx");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(REGISTRY_TOML.as_bytes()).unwrap();

        let registry = RegistryLoader::from_file(file.path()).unwrap();
        assert_eq!(registry.chains[0].chain_id, "osmosis-1");
    }

    #[test]
    fn test_unsupported_extension_fails() {
        let mut file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        file.write_all(b"whatever").unwrap();

        assert!(matches!(
            RegistryLoader::from_file(file.path()),
            Err(ConfigError::LoadError(_))
        ));
    }

    #[test]
    fn test_invalid_registry_rejected_on_load() {
        let toml = r#"
            [[chains]]
            chain_id = ""
            pretty_name = "Broken"
            rpc_endpoint = "ftp://nope"
            fee_currencies = []

            [chains.stake_currency]
            coin_denom = "X"
            coin_minimal_denom = "ux"
            coin_decimals = 6
        "#;
        assert!(matches!(
            RegistryLoader::from_toml(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_rpc_override_var_name() {
        assert_eq!(
            rpc_override_var("osmosis-1"),
            "WALLET_SESSION_RPC_OSMOSIS_1"
        );
    }

    #[test]
    fn test_env_override_replaces_endpoint() {
        let registry = crate::ChainRegistry::builtin();
        let var = rpc_override_var("osmosis-1");
        std::env::set_var(&var, "http://localhost:26657");

        let overridden = RegistryLoader::apply_env_overrides(registry).unwrap();
        assert_eq!(
            overridden.get("osmosis-1").unwrap().rpc_endpoint,
            "http://localhost:26657"
        );

        std::env::remove_var(&var);
    }
}
