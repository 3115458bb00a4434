//! Currency rates and stock prices for the main page.
//!
//! Lookups go through [`QuoteSource`]; the HTTP implementation talks to an
//! exchange-rate API (RUB conversion) and a stock quote API. Each item is
//! fetched on its own: a failed lookup is logged and left out.

use anyhow::{Context, Result, bail};
use pocket_core::round_money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

/// Currency every rate is quoted against.
pub const QUOTE_CURRENCY: &str = "RUB";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRate {
    pub currency: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPrice {
    pub stock: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Per-item quote lookups.
pub trait QuoteSource {
    /// Price of one unit of `code` in RUB.
    fn currency_rate(&self, code: &str) -> impl Future<Output = Result<f64>> + Send;

    /// Last price of `ticker`.
    fn stock_price(&self, ticker: &str) -> impl Future<Output = Result<f64>> + Send;
}

/// API keys, read once at startup and passed in explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    pub exchange_api_key: String,
    pub stock_api_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    pub exchange_base_url: String,
    pub stock_base_url: String,
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self {
            exchange_base_url: "https://api.apilayer.com".to_string(),
            stock_base_url: "https://financialmodelingprep.com".to_string(),
        }
    }
}

pub struct HttpQuoteSource {
    client: reqwest::Client,
    endpoints: ApiEndpoints,
    credentials: ApiCredentials,
}

impl HttpQuoteSource {
    pub fn new(endpoints: ApiEndpoints, credentials: ApiCredentials) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .context("build http client")?;
        Ok(Self {
            client,
            endpoints,
            credentials,
        })
    }
}

impl QuoteSource for HttpQuoteSource {
    async fn currency_rate(&self, code: &str) -> Result<f64> {
        #[derive(Deserialize)]
        struct Resp {
            result: Option<f64>,
        }

        let url = format!(
            "{}/exchangerates_data/convert",
            self.endpoints.exchange_base_url.trim_end_matches('/')
        );
        let resp = self
            .client
            .get(&url)
            .query(&[("to", QUOTE_CURRENCY), ("from", code), ("amount", "1")])
            .header("apikey", &self.credentials.exchange_api_key)
            .send()
            .await
            .with_context(|| format!("exchange rate request for {code}"))?;

        let status = resp.status();
        if !status.is_success() {
            bail!("exchange rate error for {code}: {status}");
        }

        let out: Resp = resp.json().await.context("parse exchange rate response")?;
        out.result
            .ok_or_else(|| anyhow::anyhow!("exchange rate response for {code} has no result"))
    }

    async fn stock_price(&self, ticker: &str) -> Result<f64> {
        #[derive(Deserialize)]
        struct Quote {
            symbol: String,
            price: f64,
        }

        let url = format!(
            "{}/api/v3/quote-short/{ticker}",
            self.endpoints.stock_base_url.trim_end_matches('/')
        );
        let resp = self
            .client
            .get(&url)
            .query(&[("apikey", self.credentials.stock_api_key.as_str())])
            .send()
            .await
            .with_context(|| format!("stock quote request for {ticker}"))?;

        let status = resp.status();
        if !status.is_success() {
            bail!("stock quote error for {ticker}: {status}");
        }

        let quotes: Vec<Quote> = resp.json().await.context("parse stock quote response")?;
        quotes
            .into_iter()
            .find(|q| q.symbol.eq_ignore_ascii_case(ticker))
            .map(|q| q.price)
            .ok_or_else(|| anyhow::anyhow!("no quote returned for {ticker}"))
    }
}

fn to_money(value: f64) -> Result<Decimal> {
    let d = Decimal::try_from(value).with_context(|| format!("not a finite amount: {value}"))?;
    Ok(round_money(d))
}

/// Look up every currency in order. Failed lookups are logged and omitted.
pub async fn get_currency_rates<S: QuoteSource>(source: &S, codes: &[String]) -> Vec<CurrencyRate> {
    let mut out = Vec::with_capacity(codes.len());
    for code in codes {
        match source.currency_rate(code).await.and_then(to_money) {
            Ok(rate) => out.push(CurrencyRate {
                currency: code.clone(),
                rate,
            }),
            Err(e) => log::warn!("currency rate for {code} unavailable: {e:#}"),
        }
    }
    out
}

/// Look up every ticker in order. Failed lookups are logged and omitted.
pub async fn get_stock_prices<S: QuoteSource>(source: &S, tickers: &[String]) -> Vec<StockPrice> {
    let mut out = Vec::with_capacity(tickers.len());
    for ticker in tickers {
        match source.stock_price(ticker).await.and_then(to_money) {
            Ok(price) => out.push(StockPrice {
                stock: ticker.clone(),
                price,
            }),
            Err(e) => log::warn!("stock price for {ticker} unavailable: {e:#}"),
        }
    }
    out
}
