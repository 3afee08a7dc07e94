use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;
use rust_decimal::Decimal;

/// An amount of a single denomination.
///
/// `Uint128` serializes as a decimal string, so amounts never pass through
/// floating point on the wire.
#[cw_serde]
pub struct Coin {
    /// Amount in minor units
    pub amount: Uint128,

    /// Denomination of the amount (e.g., "uosmo")
    pub denom: String,
}

impl Coin {
    pub fn new(amount: u128, denom: impl Into<String>) -> Self {
        Self {
            amount: Uint128::new(amount),
            denom: denom.into(),
        }
    }

    /// Render the amount in whole units to two decimal places,
    /// e.g. 1000000 uosmo at 6 decimals becomes "1.00 uosmo".
    ///
    /// Amounts too large for decimal rendering fall back to raw minor units.
    pub fn display_whole(&self, decimals: u32) -> String {
        let whole = i128::try_from(self.amount.u128())
            .ok()
            .and_then(|n| Decimal::try_from_i128_with_scale(n, decimals).ok());

        match whole {
            Some(whole) => format!("{:.2} {}", whole.round_dp(2), self.denom),
            None => format!("{} {}", self.amount, self.denom),
        }
    }
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Transaction fee: fee coins plus a gas budget.
#[cw_serde]
pub struct Fee {
    pub amount: Vec<Coin>,

    /// Gas limit in gas units
    pub gas: u64,
}

impl Fee {
    pub fn new(amount: Vec<Coin>, gas: u64) -> Self {
        Self { amount, gas }
    }
}
