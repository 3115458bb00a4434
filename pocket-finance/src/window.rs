//! Month-to-date window over a transaction list.

use chrono::NaiveDateTime;
use pocket_core::Transaction;
use pocket_core::time::{default_reference, month_start};

/// Transactions dated within [first day of `reference`'s month 00:00:00,
/// `reference`], in their original order. Undated transactions are dropped.
pub fn month_to_date(txns: &[Transaction], reference: NaiveDateTime) -> Vec<Transaction> {
    let start = month_start(reference);
    txns.iter()
        .filter(|t| {
            t.operation_date
                .is_some_and(|d| start <= d && d <= reference)
        })
        .cloned()
        .collect()
}

/// `month_to_date` with the fixed fallback reference when none is given.
pub fn filter_transactions(txns: &[Transaction], reference: Option<NaiveDateTime>) -> Vec<Transaction> {
    month_to_date(txns, reference.unwrap_or_else(default_reference))
}
