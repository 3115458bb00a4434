//! pocket-finance: month window, card totals, top operations, quotes, and reports

pub mod cards;
pub mod invest;
pub mod market;
pub mod reports;
pub mod top;
pub mod view;
pub mod window;

#[cfg(test)]
mod testing;

pub use cards::{CardSummary, summarize_cards};
pub use invest::{RoundUpStep, investment_bank, round_up_to_step};
pub use market::{
    ApiCredentials, ApiEndpoints, CurrencyRate, HttpQuoteSource, QuoteSource, StockPrice,
    get_currency_rates, get_stock_prices,
};
pub use reports::{SpendingByWorkday, save_report, spending_by_workday, write_report};
pub use top::{TOP_N, top_transactions};
pub use view::{MainPage, build_main_page};
pub use window::{filter_transactions, month_to_date};
