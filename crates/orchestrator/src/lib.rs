pub mod balance;
pub mod inspector;
pub mod notice;
pub mod orchestrator;
pub mod session;
pub mod transfer;


// Re-export main types
pub use balance::BalanceReader;
pub use inspector::TransactionInspector;
pub use notice::{Notice, Notices};
pub use orchestrator::{ConnectError, ConnectOutcome, SessionOrchestrator};
pub use session::{Session, SessionHandle, SigningSession};
pub use transfer::{SendOutcome, TransferExecutor, FEE_AMOUNT, GAS_LIMIT, TRANSFER_WHOLE_UNITS};
