//! Main page: output rows and the assembled JSON answer.

use chrono::NaiveDateTime;
use pocket_core::time::format_day_first;
use pocket_core::{Greeting, Transaction, round_money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cards::{CardSummary, summarize_cards};
use crate::market::{CurrencyRate, StockPrice};
use crate::top::{TOP_N, top_transactions};
use crate::window::month_to_date;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRow {
    pub last_digits: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_spent: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub cashback: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopTransactionRow {
    /// `DD.MM.YYYY`, empty when the operation had no date
    pub date: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainPage {
    pub greeting: String,
    pub cards: Vec<CardRow>,
    pub top_transactions: Vec<TopTransactionRow>,
    pub currency_rates: Vec<CurrencyRate>,
    pub stock_prices: Vec<StockPrice>,
}

impl From<&CardSummary> for CardRow {
    fn from(card: &CardSummary) -> Self {
        Self {
            last_digits: card.last_digits.clone(),
            total_spent: round_money(card.total_spent),
            cashback: round_money(card.cashback),
        }
    }
}

impl From<&Transaction> for TopTransactionRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            date: txn.operation_date.map(format_day_first).unwrap_or_default(),
            amount: round_money(txn.operation_amount),
            category: txn.category.clone(),
            description: txn.description.clone(),
        }
    }
}

pub fn card_rows(cards: &[CardSummary]) -> Vec<CardRow> {
    cards.iter().map(CardRow::from).collect()
}

pub fn top_transaction_rows(txns: &[Transaction]) -> Vec<TopTransactionRow> {
    txns.iter().map(TopTransactionRow::from).collect()
}

/// Assemble the main page for the month up to `reference`.
///
/// `greeting_at` is the wall-clock time the greeting is chosen for; quotes
/// are fetched by the caller and passed in as they are.
pub fn build_main_page(
    txns: &[Transaction],
    reference: NaiveDateTime,
    greeting_at: NaiveDateTime,
    currency_rates: Vec<CurrencyRate>,
    stock_prices: Vec<StockPrice>,
) -> MainPage {
    let period = month_to_date(txns, reference);
    log::debug!("{} of {} transactions in the reporting month", period.len(), txns.len());

    MainPage {
        greeting: Greeting::at(greeting_at).to_string(),
        cards: card_rows(&summarize_cards(&period)),
        top_transactions: top_transaction_rows(&top_transactions(&period, TOP_N)),
        currency_rates,
        stock_prices,
    }
}
