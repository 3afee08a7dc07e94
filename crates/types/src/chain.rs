use cosmwasm_schema::cw_serde;

/// One currency entry from a chain's registry metadata
#[cw_serde]
pub struct Currency {
    /// Display denomination (e.g., "OSMO")
    pub coin_denom: String,

    /// Minimal on-chain denomination (e.g., "uosmo")
    pub coin_minimal_denom: String,

    /// Decimal exponent between the two (minor units per whole unit = 10^decimals)
    pub coin_decimals: u32,
}

impl Currency {
    pub fn new(
        denom: impl Into<String>,
        minimal_denom: impl Into<String>,
        decimals: u32,
    ) -> Self {
        Self {
            coin_denom: denom.into(),
            coin_minimal_denom: minimal_denom.into(),
            coin_decimals: decimals,
        }
    }
}

/// Static parameter set identifying a network and its currencies.
///
/// Descriptors are immutable once selected; a network change swaps the
/// whole record, never individual fields.
#[cw_serde]
pub struct ChainDescriptor {
    /// Chain identifier (e.g., "osmosis-1")
    pub chain_id: String,

    /// Human-readable network name
    pub pretty_name: String,

    /// Tendermint RPC endpoint the signing client binds to
    pub rpc_endpoint: String,

    /// Native staking currency
    pub stake_currency: Currency,

    /// Currencies accepted for transaction fees
    pub fee_currencies: Vec<Currency>,
}
