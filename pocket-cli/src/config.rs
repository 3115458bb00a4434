use anyhow::{Context, Result, bail};
use log::LevelFilter;
use pocket_finance::{ApiCredentials, ApiEndpoints};
use serde::{Deserialize, Serialize};
use simple_logger::SimpleLogger;
use std::fs;
use std::path::Path;

pub const EXCHANGE_API_KEY: &str = "EXCHANGE_API_KEY";
pub const STOCK_API_KEY: &str = "STOCK_API_KEY";
pub const EXCHANGE_API_URL: &str = "EXCHANGE_API_URL";
pub const STOCK_API_URL: &str = "STOCK_API_URL";

/// User preferences: which currencies and tickers the main page quotes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub user_currencies: Vec<String>,
    #[serde(default)]
    pub user_stocks: Vec<String>,
}

/// Everything the main page needs from outside the export, built once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub settings: Settings,
    /// `None` when running offline
    pub credentials: Option<ApiCredentials>,
    pub endpoints: ApiEndpoints,
}

impl AppConfig {
    pub fn load(settings_path: &Path, offline: bool) -> Result<Self> {
        Self::from_lookup(settings_path, offline, |name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(settings_path: &Path, offline: bool, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let settings = read_settings(settings_path)?;
        let credentials = if offline {
            None
        } else {
            Some(credentials_from(&lookup)?)
        };
        Ok(Self {
            settings,
            credentials,
            endpoints: endpoints_from(&lookup),
        })
    }
}

pub fn read_settings(path: &Path) -> Result<Settings> {
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

fn non_empty<F: Fn(&str) -> Option<String>>(lookup: &F, name: &str) -> Option<String> {
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn credentials_from<F: Fn(&str) -> Option<String>>(lookup: &F) -> Result<ApiCredentials> {
    let Some(exchange_api_key) = non_empty(lookup, EXCHANGE_API_KEY) else {
        bail!("{EXCHANGE_API_KEY} is not set (pass --offline to skip quotes)");
    };
    let Some(stock_api_key) = non_empty(lookup, STOCK_API_KEY) else {
        bail!("{STOCK_API_KEY} is not set (pass --offline to skip quotes)");
    };
    Ok(ApiCredentials {
        exchange_api_key,
        stock_api_key,
    })
}

pub fn endpoints_from<F: Fn(&str) -> Option<String>>(lookup: &F) -> ApiEndpoints {
    let defaults = ApiEndpoints::default();
    ApiEndpoints {
        exchange_base_url: non_empty(lookup, EXCHANGE_API_URL).unwrap_or(defaults.exchange_base_url),
        stock_base_url: non_empty(lookup, STOCK_API_URL).unwrap_or(defaults.stock_base_url),
    }
}

/// Stderr logger at `Warn` (or `Debug` with `--verbose`); `RUST_LOG` wins.
pub fn configure_logging(verbose: bool) -> Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    SimpleLogger::new()
        .with_level(level)
        .env()
        .init()
        .context("initialize logger")?;
    Ok(())
}
