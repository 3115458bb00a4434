//! Per-card spend and cashback totals.

use pocket_core::Transaction;
use pocket_core::money::zero;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Running totals for one card, keyed by its last four characters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSummary {
    pub last_digits: String,
    pub total_spent: Decimal,
    pub cashback: Decimal,
}

impl CardSummary {
    pub fn new(last_digits: impl Into<String>) -> Self {
        Self {
            last_digits: last_digits.into(),
            total_spent: zero(),
            cashback: zero(),
        }
    }
}

/// Group transactions by card suffix in a single pass.
///
/// `FAILED` operations and operations without a card are skipped, as is an
/// operation that would overflow its card's totals. Cards are listed in order
/// of first appearance.
pub fn summarize_cards(txns: &[Transaction]) -> Vec<CardSummary> {
    let mut cards: Vec<CardSummary> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for txn in txns {
        if txn.status.is_failed() {
            continue;
        }

        let Some(suffix) = txn.card_suffix() else {
            log::debug!("skipping operation without card: {:?}", txn.description);
            continue;
        };

        let slot = *slots.entry(suffix.to_string()).or_insert_with(|| {
            cards.push(CardSummary::new(suffix));
            cards.len() - 1
        });

        let card = &mut cards[slot];
        let totals = card
            .total_spent
            .checked_add(txn.operation_amount)
            .zip(card.cashback.checked_add(txn.cashback));
        match totals {
            Some((total_spent, cashback)) => {
                card.total_spent = total_spent;
                card.cashback = cashback;
            }
            None => log::warn!(
                "skipping operation that overflows card {} totals: {}",
                card.last_digits,
                txn.operation_amount
            ),
        }
    }

    cards
}
