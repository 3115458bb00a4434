//! Largest operations of a period.

use pocket_core::Transaction;

/// Number of operations shown on the main page.
pub const TOP_N: usize = 5;

/// The `n` transactions with the largest operation amount. Equal amounts keep
/// their original relative order.
pub fn top_transactions(txns: &[Transaction], n: usize) -> Vec<Transaction> {
    let mut ranked: Vec<&Transaction> = txns.iter().collect();
    // sort_by is stable, so ties stay in input order
    ranked.sort_by(|a, b| b.operation_amount.cmp(&a.operation_amount));
    ranked.into_iter().take(n).cloned().collect()
}
