//! The normalized transaction record every loader produces.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of trailing characters of a card identifier used as its key.
pub const CARD_SUFFIX_LEN: usize = 4;

/// Operation status as reported by the bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "FAILED")]
    Failed,
    Other(String),
}

impl TxStatus {
    /// Exact, case-sensitive match: only `"FAILED"` is a failure.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "OK" => TxStatus::Ok,
            "FAILED" => TxStatus::Failed,
            other => TxStatus::Other(other.to_string()),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TxStatus::Failed)
    }

    pub fn as_str(&self) -> &str {
        match self {
            TxStatus::Ok => "OK",
            TxStatus::Failed => "FAILED",
            TxStatus::Other(s) => s,
        }
    }
}

/// One row of a bank export. Amounts are two-decimal fixed point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// When the operation happened; `None` when the export value was unparseable
    pub operation_date: Option<NaiveDateTime>,
    pub payment_date: Option<NaiveDateTime>,
    /// Masked card identifier, e.g. `*7197`; empty for non-card operations
    pub card_number: String,
    pub status: TxStatus,
    /// Amount in the operation currency (negative = spend)
    pub operation_amount: Decimal,
    pub operation_currency: String,
    /// Amount in the account currency
    pub payment_amount: Decimal,
    pub payment_currency: String,
    pub cashback: Decimal,
    pub category: String,
    pub mcc: String,
    pub description: String,
    /// Bonuses, cashback included
    pub bonuses: Decimal,
    /// Amount moved to the investment piggy bank by the bank
    pub invest_rounding: Decimal,
    pub rounded_operation_amount: Decimal,
}

impl Transaction {
    /// Last four characters of the card identifier, or `None` when the
    /// operation has no card.
    pub fn card_suffix(&self) -> Option<&str> {
        let card = self.card_number.trim();
        if card.is_empty() {
            return None;
        }
        let start = card
            .char_indices()
            .rev()
            .nth(CARD_SUFFIX_LEN - 1)
            .map(|(i, _)| i)
            .unwrap_or(0);
        Some(&card[start..])
    }
}
