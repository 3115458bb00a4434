//! pocket-core: transaction record, decimal-safe money parsing, and date helpers

pub mod greeting;
pub mod money;
pub mod time;
pub mod transaction;

pub use greeting::Greeting;
pub use money::{parse_amount, round_money};
pub use transaction::{Transaction, TxStatus, CARD_SUFFIX_LEN};
