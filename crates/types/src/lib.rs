pub mod chain;
pub mod coin;
pub mod transfer;

pub use chain::*;
pub use coin::*;
pub use transfer::*;
