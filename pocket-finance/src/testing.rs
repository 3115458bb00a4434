//! Transaction builders shared by the unit tests.

use chrono::NaiveDateTime;
use pocket_core::{Transaction, TxStatus, parse_amount};

pub fn blank() -> Transaction {
    Transaction {
        operation_date: None,
        payment_date: None,
        card_number: String::new(),
        status: TxStatus::Ok,
        operation_amount: parse_amount("0"),
        operation_currency: "RUB".to_string(),
        payment_amount: parse_amount("0"),
        payment_currency: "RUB".to_string(),
        cashback: parse_amount("0"),
        category: String::new(),
        mcc: String::new(),
        description: String::new(),
        bonuses: parse_amount("0"),
        invest_rounding: parse_amount("0"),
        rounded_operation_amount: parse_amount("0"),
    }
}

/// Dated transaction; `amount` goes to both operation and payment amount.
pub fn tx_at(date: Option<NaiveDateTime>, amount: &str, description: &str) -> Transaction {
    Transaction {
        operation_date: date,
        payment_date: date,
        operation_amount: parse_amount(amount),
        payment_amount: parse_amount(amount),
        description: description.to_string(),
        ..blank()
    }
}

pub fn tx_card(card: &str, status: &str, amount: &str, cashback: &str) -> Transaction {
    Transaction {
        card_number: card.to_string(),
        status: TxStatus::parse(status),
        operation_amount: parse_amount(amount),
        payment_amount: parse_amount(amount),
        cashback: parse_amount(cashback),
        ..blank()
    }
}
